use std::collections::HashMap;

use crate::model::{Author, Book};

pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub book_link: Option<String>,
    pub genres: Vec<i32>,
    pub average_rating: f64,
    pub published_year: i32,
}

pub fn join_authors(authors: &[Author], books: &[Book]) -> Vec<BookView> {
    let names = authors
        .iter()
        .map(|author| (author.id, author.name.as_str()))
        .collect::<HashMap<_, _>>();
    books
        .iter()
        .map(|book| BookView {
            id: book.id,
            title: book.title.clone(),
            author: names
                .get(&book.author_id)
                .copied()
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
            book_link: book.book_link.clone(),
            genres: book.genres.clone(),
            average_rating: book.average_rating,
            published_year: book.published_year,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test {
    use super::{join_authors, UNKNOWN_AUTHOR};
    use crate::model::{Author, Book};

    pub fn book(id: i64, title: &str, author_id: i64, rating: f64, year: i32) -> Book {
        Book {
            id,
            title: title.to_string(),
            author_id,
            book_link: None,
            genres: vec![1],
            average_rating: rating,
            published_year: year,
        }
    }

    #[test]
    fn resolves_author_names() {
        let authors = vec![Author {
            id: 1,
            name: "Tolkien".to_string(),
        }];
        let mut hobbit = book(10, "The Hobbit", 1, 4.8, 1937);
        hobbit.genres = vec![1, 2];
        let joined = join_authors(&authors, &[hobbit]);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].author, "Tolkien");
        assert_eq!(joined[0].title, "The Hobbit");
        assert_eq!(joined[0].genres, vec![1, 2]);
    }

    #[test]
    fn unresolved_author_is_unknown() {
        let joined = join_authors(&[], &[book(1, "Orphan", 99, 3.0, 2000)]);
        assert_eq!(joined[0].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn keeps_book_order() {
        let authors = vec![
            Author {
                id: 1,
                name: "A".to_string(),
            },
            Author {
                id: 2,
                name: "B".to_string(),
            },
        ];
        let books = vec![book(3, "x", 2, 1.0, 2000), book(1, "y", 1, 1.0, 2000)];
        let joined = join_authors(&authors, &books);
        let ids = joined.iter().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1]);
    }
}
