use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub book_link: Option<String>,
    pub genres: Vec<i32>,
    pub average_rating: f64,
    pub published_year: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let genres = value.genres().to_raw();
        let DestructBook {
            id,
            title,
            author_id,
            book_link,
            average_rating,
            published_year,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
            book_link: book_link.map(Into::into),
            genres,
            average_rating: average_rating.into(),
            published_year: published_year.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookFieldsDto {
    pub title: String,
    pub author_id: i64,
    pub book_link: Option<String>,
    pub genres: Vec<i32>,
    pub average_rating: f64,
    pub published_year: i32,
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct UpdateBookDto {
    pub id: i64,
    pub fields: BookFieldsDto,
}

pub struct DeleteBookDto {
    pub id: i64,
}
