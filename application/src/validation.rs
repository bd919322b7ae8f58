use error_stack::Report;

use kernel::prelude::entity::{
    AuthorId, AuthorName, AverageRating, BookDraft, BookGenres, BookLink, BookTitle, GenreId,
    PublishedYear,
};
use kernel::KernelError;

use crate::transfer::BookFieldsDto;

pub(crate) fn author_name(name: &str) -> error_stack::Result<AuthorName, KernelError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(KernelError::Validation.with_detail("Author name cannot be empty."));
    }
    Ok(AuthorName::new(name))
}

pub(crate) fn book_draft(
    fields: BookFieldsDto,
    current_year: &PublishedYear,
) -> error_stack::Result<BookDraft, KernelError> {
    let title = fields.title.trim();
    if title.is_empty() {
        return Err(KernelError::Validation.with_detail("Title cannot be empty."));
    }

    let genres = BookGenres::new(fields.genres.into_iter().map(GenreId::new));
    if genres.is_empty() {
        return Err(KernelError::Validation.with_detail("Genres cannot be empty."));
    }

    let average_rating = AverageRating::new(fields.average_rating);
    if !average_rating.is_in_range() {
        return Err(invalid(format!(
            "Average rating must be between {} and {}, got {}.",
            AverageRating::MIN,
            AverageRating::MAX,
            fields.average_rating
        )));
    }

    let published_year = PublishedYear::new(fields.published_year);
    if !published_year.is_between(PublishedYear::EARLIEST, current_year) {
        return Err(invalid(format!(
            "Published year must be between {} and {}, got {}.",
            PublishedYear::EARLIEST,
            current_year.as_ref(),
            fields.published_year
        )));
    }

    Ok(BookDraft::new(
        BookTitle::new(title),
        AuthorId::new(fields.author_id),
        BookLink::parse(fields.book_link),
        genres,
        average_rating,
        published_year,
    ))
}

fn invalid(detail: String) -> Report<KernelError> {
    KernelError::Validation.with_detail(detail)
}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::PublishedYear;
    use kernel::{ErrorDetailAttachment, KernelError};

    use super::{author_name, book_draft};
    use crate::transfer::BookFieldsDto;

    fn hobbit() -> BookFieldsDto {
        BookFieldsDto {
            title: "The Hobbit".to_string(),
            author_id: 1,
            book_link: None,
            genres: vec![1, 2],
            average_rating: 4.8,
            published_year: 1937,
        }
    }

    #[test]
    fn author_name_is_trimmed() {
        let name = author_name("  Tolkien ").unwrap();
        assert_eq!(name.as_ref(), "Tolkien");
    }

    #[test]
    fn blank_author_name_is_rejected() {
        let error = author_name(" \t ").unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Validation);
        assert_eq!(
            error.detail().map(AsRef::as_ref),
            Some("Author name cannot be empty.")
        );
    }

    #[test]
    fn empty_genres_are_rejected() {
        let year = PublishedYear::new(2024);
        let fields = BookFieldsDto {
            genres: vec![],
            ..hobbit()
        };
        let error = book_draft(fields, &year).unwrap_err();
        assert_eq!(
            error.detail().map(AsRef::as_ref),
            Some("Genres cannot be empty.")
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let year = PublishedYear::new(2024);
        let fields = BookFieldsDto {
            title: "   ".to_string(),
            ..hobbit()
        };
        let error = book_draft(fields, &year).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Validation);
    }

    #[test]
    fn year_detail_names_the_bounds() {
        let year = PublishedYear::new(2024);
        let fields = BookFieldsDto {
            published_year: 2025,
            ..hobbit()
        };
        let error = book_draft(fields, &year).unwrap_err();
        assert_eq!(
            error.detail().map(AsRef::as_ref),
            Some("Published year must be between 1440 and 2024, got 2025.")
        );
    }

    #[test]
    fn valid_fields_build_a_draft() {
        let year = PublishedYear::new(2024);
        let fields = BookFieldsDto {
            title: " The Hobbit ".to_string(),
            book_link: Some("  ".to_string()),
            genres: vec![2, 1, 2],
            ..hobbit()
        };
        let draft = book_draft(fields, &year).unwrap();
        assert_eq!(draft.title().as_ref(), "The Hobbit");
        assert!(draft.book_link().is_none());
        assert_eq!(draft.genres().to_raw(), vec![2, 1]);
    }
}
