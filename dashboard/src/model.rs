use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    #[serde(default)]
    pub book_link: Option<String>,
    pub genres: Vec<i32>,
    pub average_rating: f64,
    pub published_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub author_id: i64,
    pub book_link: Option<String>,
    pub genres: Vec<i32>,
    pub average_rating: f64,
    pub published_year: i32,
}
