use error_stack::Report;

use crate::error::DashboardError;
use crate::model::{Book, BookPayload};

pub const EARLIEST_YEAR: i32 = 1440;
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

fn invalid(message: impl Into<String>) -> Report<DashboardError> {
    Report::new(DashboardError::Input(message.into()))
}

pub fn parse_genres(input: &str) -> Vec<i32> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && entry.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|entry| entry.parse().ok())
        .collect()
}

pub fn author_name(name: &str) -> error_stack::Result<String, DashboardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("Author name cannot be empty."));
    }
    Ok(name.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author_id: i64,
    pub book_link: Option<String>,
    pub genres: String,
    pub average_rating: f64,
    pub published_year: i32,
}

impl BookForm {
    pub fn into_payload(
        self,
        current_year: i32,
    ) -> error_stack::Result<BookPayload, DashboardError> {
        let title = self.title.trim();
        if title.is_empty() || self.genres.trim().is_empty() {
            return Err(invalid("Title and Genres cannot be empty."));
        }
        let genres = parse_genres(&self.genres);
        if genres.is_empty() {
            return Err(invalid("Genres must contain at least one numeric id."));
        }
        if !RATING_RANGE.contains(&self.average_rating) {
            return Err(invalid(format!(
                "Average rating must be between 0 and 5, got {}.",
                self.average_rating
            )));
        }
        if !(EARLIEST_YEAR..=current_year).contains(&self.published_year) {
            return Err(invalid(format!(
                "Published year must be between {EARLIEST_YEAR} and {current_year}, got {}.",
                self.published_year
            )));
        }
        let book_link = self
            .book_link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());
        Ok(BookPayload {
            title: title.to_string(),
            author_id: self.author_id,
            book_link,
            genres,
            average_rating: self.average_rating,
            published_year: self.published_year,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author_id: Option<i64>,
    pub book_link: Option<String>,
    pub genres: Option<String>,
    pub average_rating: Option<f64>,
    pub published_year: Option<i32>,
}

impl BookChanges {
    pub fn apply(self, current: &Book) -> BookForm {
        BookForm {
            title: self.title.unwrap_or_else(|| current.title.clone()),
            author_id: self.author_id.unwrap_or(current.author_id),
            book_link: self.book_link.or_else(|| current.book_link.clone()),
            genres: self.genres.unwrap_or_else(|| {
                current
                    .genres
                    .iter()
                    .map(i32::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            }),
            average_rating: self.average_rating.unwrap_or(current.average_rating),
            published_year: self.published_year.unwrap_or(current.published_year),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn form() -> BookForm {
        BookForm {
            title: "The Hobbit".to_string(),
            author_id: 1,
            book_link: Some("  ".to_string()),
            genres: "1, 2".to_string(),
            average_rating: 4.8,
            published_year: 1937,
        }
    }

    fn input_message(report: Report<DashboardError>) -> String {
        match report.current_context() {
            DashboardError::Input(message) => message.clone(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn genres_ignore_non_numeric_entries() {
        assert_eq!(parse_genres("1, 2,abc, ,-3, 4x,5"), vec![1, 2, 5]);
        assert!(parse_genres("fantasy").is_empty());
    }

    #[test]
    fn author_name_is_trimmed() {
        assert_eq!(author_name("  Tolkien ").unwrap(), "Tolkien");
        let report = author_name("   ").unwrap_err();
        assert_eq!(input_message(report), "Author name cannot be empty.");
    }

    #[test]
    fn valid_form_becomes_payload() {
        let payload = form().into_payload(2024).unwrap();
        assert_eq!(payload.title, "The Hobbit");
        assert_eq!(payload.book_link, None);
        assert_eq!(payload.genres, vec![1, 2]);
    }

    #[test]
    fn empty_title_or_genres() {
        let mut blank = form();
        blank.title = " ".to_string();
        assert_eq!(
            input_message(blank.into_payload(2024).unwrap_err()),
            "Title and Genres cannot be empty."
        );
        let mut blank = form();
        blank.genres = String::new();
        assert!(blank.into_payload(2024).is_err());
        let mut words = form();
        words.genres = "fantasy, adventure".to_string();
        assert!(words.into_payload(2024).is_err());
    }

    #[test]
    fn ranges_are_inclusive() {
        for (rating, ok) in [(0.0, true), (5.0, true), (-0.1, false), (5.01, false)] {
            let mut f = form();
            f.average_rating = rating;
            assert_eq!(f.into_payload(2024).is_ok(), ok, "rating {rating}");
        }
        for (year, ok) in [(1439, false), (1440, true), (2024, true), (2025, false)] {
            let mut f = form();
            f.published_year = year;
            assert_eq!(f.into_payload(2024).is_ok(), ok, "year {year}");
        }
    }

    #[test]
    fn changes_merge_onto_current_book() {
        let current = Book {
            id: 7,
            title: "Old".to_string(),
            author_id: 1,
            book_link: Some("https://example.org".to_string()),
            genres: vec![3, 4],
            average_rating: 3.0,
            published_year: 1990,
        };
        let changes = BookChanges {
            title: Some("New".to_string()),
            average_rating: Some(4.5),
            ..BookChanges::default()
        };
        let payload = changes.apply(&current).into_payload(2024).unwrap();
        assert_eq!(payload.title, "New");
        assert_eq!(payload.author_id, 1);
        assert_eq!(payload.book_link.as_deref(), Some("https://example.org"));
        assert_eq!(payload.genres, vec![3, 4]);
        assert_eq!(payload.average_rating, 4.5);
        assert_eq!(payload.published_year, 1990);
    }
}
