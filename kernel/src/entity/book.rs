mod genre;
mod id;
mod link;
mod rating;
mod title;
mod year;

pub use self::{genre::*, id::*, link::*, rating::*, title::*, year::*};
use crate::entity::AuthorId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author_id: AuthorId,
    book_link: Option<BookLink>,
    genres: BookGenres,
    average_rating: AverageRating,
    published_year: PublishedYear,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author_id: AuthorId,
        book_link: Option<BookLink>,
        genres: BookGenres,
        average_rating: AverageRating,
        published_year: PublishedYear,
    ) -> Self {
        Self {
            id,
            title,
            author_id,
            book_link,
            genres,
            average_rating,
            published_year,
        }
    }

    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        let DestructBookDraft {
            title,
            author_id,
            book_link,
            genres,
            average_rating,
            published_year,
        } = draft.into_destruct();
        Self::new(
            id,
            title,
            author_id,
            book_link,
            genres,
            average_rating,
            published_year,
        )
    }
}

#[derive(Debug, Clone, PartialEq, References, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    author_id: AuthorId,
    book_link: Option<BookLink>,
    genres: BookGenres,
    average_rating: AverageRating,
    published_year: PublishedYear,
}

impl BookDraft {
    pub fn new(
        title: BookTitle,
        author_id: AuthorId,
        book_link: Option<BookLink>,
        genres: BookGenres,
        average_rating: AverageRating,
        published_year: PublishedYear,
    ) -> Self {
        Self {
            title,
            author_id,
            book_link,
            genres,
            average_rating,
            published_year,
        }
    }
}
