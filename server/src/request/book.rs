use crate::controller::Intake;
use application::transfer::{BookFieldsDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    title: String,
    author_id: i64,
    #[serde(default)]
    book_link: Option<String>,
    genres: Vec<i32>,
    average_rating: f64,
    published_year: i32,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<BookRequest> for BookTransformer {
    type To = BookFieldsDto;
    fn emit(&self, input: BookRequest) -> Self::To {
        BookFieldsDto {
            title: input.title,
            author_id: input.author_id,
            book_link: input.book_link,
            genres: input.genres,
            average_rating: input.average_rating,
            published_year: input.published_year,
        }
    }
}

impl Intake<(i64, BookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (i64, BookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            fields: <Self as Intake<BookRequest>>::emit(self, input),
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
