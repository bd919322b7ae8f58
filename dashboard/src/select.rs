use std::convert::Infallible;
use std::str::FromStr;

use error_stack::Report;

use crate::error::DashboardError;
use crate::model::{Author, Book};

// `#12` always means id 12. A bare `1984` is looked up as a name or title
// first and only falls back to the id when nothing carries that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(i64),
    Name(String),
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let explicit_id = s.strip_prefix('#').and_then(|id| id.trim().parse().ok());
        Ok(match explicit_id {
            Some(id) => Selector::Id(id),
            None => Selector::Name(s.to_string()),
        })
    }
}

impl Selector {
    fn pick<'a, T>(
        &self,
        records: &'a [T],
        kind: &str,
        id: impl Fn(&T) -> i64,
        name: impl Fn(&T) -> &str,
    ) -> error_stack::Result<&'a T, DashboardError> {
        let found = match self {
            Selector::Id(wanted) => records.iter().find(|r| id(*r) == *wanted),
            Selector::Name(wanted) => {
                let by_id = || {
                    let wanted = wanted.parse::<i64>().ok()?;
                    records.iter().find(|r| id(*r) == wanted)
                };
                records.iter().find(|r| name(*r) == wanted).or_else(by_id)
            }
        };
        found.ok_or_else(|| self.not_found(kind))
    }

    fn not_found(&self, kind: &str) -> Report<DashboardError> {
        let message = match self {
            Selector::Id(id) => format!("No {kind} with id {id}."),
            Selector::Name(name) => format!("No {kind} named \"{name}\"."),
        };
        Report::new(DashboardError::Input(message))
    }
}

pub fn author<'a>(
    authors: &'a [Author],
    selector: &Selector,
) -> error_stack::Result<&'a Author, DashboardError> {
    selector.pick(authors, "author", |a| a.id, |a| a.name.as_str())
}

pub fn book<'a>(
    books: &'a [Book],
    selector: &Selector,
) -> error_stack::Result<&'a Book, DashboardError> {
    selector.pick(books, "book", |b| b.id, |b| b.title.as_str())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::join::test::book as sample_book;

    fn authors() -> Vec<Author> {
        vec![
            Author {
                id: 1,
                name: "Tolkien".to_string(),
            },
            Author {
                id: 2,
                name: "Tolkien".to_string(),
            },
            Author {
                id: 3,
                name: "1984".to_string(),
            },
        ]
    }

    fn selector(input: &str) -> Selector {
        input.parse().unwrap()
    }

    #[test]
    fn hash_prefix_selects_by_id() {
        assert_eq!(selector(" #42 "), Selector::Id(42));
        assert_eq!(selector("42"), Selector::Name("42".to_string()));
        assert_eq!(selector("#x"), Selector::Name("#x".to_string()));
    }

    #[test]
    fn first_name_match_wins() {
        let authors = authors();
        assert_eq!(author(&authors, &selector("Tolkien")).unwrap().id, 1);
        assert_eq!(author(&authors, &selector("#2")).unwrap().id, 2);
    }

    #[test]
    fn numeric_name_is_matched_before_id() {
        let authors = authors();
        assert_eq!(author(&authors, &selector("1984")).unwrap().id, 3);
        assert_eq!(author(&authors, &selector("2")).unwrap().id, 2);
    }

    #[test]
    fn numeric_title_does_not_hit_another_book_id() {
        let books = vec![
            sample_book(1984, "The Hobbit", 1, 4.8, 1937),
            sample_book(7, "1984", 1, 4.2, 1949),
        ];
        assert_eq!(book(&books, &selector("1984")).unwrap().id, 7);
        assert_eq!(book(&books, &selector("#1984")).unwrap().id, 1984);
    }

    #[test]
    fn missing_selection_is_input_error() {
        let report = author(&authors(), &selector("#9")).unwrap_err();
        assert_eq!(
            report.current_context(),
            &DashboardError::Input("No author with id 9.".to_string())
        );
        let books = vec![sample_book(5, "The Hobbit", 1, 4.8, 1937)];
        assert!(book(&books, &selector("Dune")).is_err());
        assert!(book(&books, &selector("9")).is_err());
    }
}
