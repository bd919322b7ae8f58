use std::fmt::{self, Display, Formatter};

use crate::aggregate::{HistogramBin, Summary};
use crate::join::BookView;
use crate::model::Author;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = self
            .headers
            .iter()
            .map(|h| h.chars().count())
            .collect::<Vec<_>>();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let line = |f: &mut Formatter<'_>, cells: &[String]| -> fmt::Result {
            let rendered = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>();
            writeln!(f, "{}", rendered.join("  ").trim_end())
        };
        line(f, &self.headers)?;
        let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
        line(f, &rule)?;
        if self.rows.is_empty() {
            return writeln!(f, "(no rows)");
        }
        for row in &self.rows {
            line(f, row)?;
        }
        Ok(())
    }
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{v:.precision$}"))
        .unwrap_or_else(|| "-".to_string())
}

fn genres(genres: &[i32]) -> String {
    genres
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn authors_table(authors: &[Author]) -> Table {
    let mut table = Table::new(["id", "name"]);
    for author in authors {
        table.push(vec![author.id.to_string(), author.name.clone()]);
    }
    table
}

pub fn books_table(books: &[BookView]) -> Table {
    let mut table = Table::new(["id", "title", "author", "genres", "rating", "year", "link"]);
    for book in books {
        table.push(vec![
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            genres(&book.genres),
            format!("{:.2}", book.average_rating),
            book.published_year.to_string(),
            book.book_link.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new(["metric", "value"]);
    table.push(vec!["books".into(), summary.total_books.to_string()]);
    table.push(vec!["authors".into(), summary.total_authors.to_string()]);
    table.push(vec![
        "average rating".into(),
        optional(summary.average_rating, 2),
    ]);
    table.push(vec![
        "average published year".into(),
        optional(summary.average_published_year, 0),
    ]);
    table
}

pub fn books_per_author_table(counts: &[(String, usize)]) -> Table {
    let mut table = Table::new(["author", "books"]);
    for (author, count) in counts {
        table.push(vec![author.clone(), count.to_string()]);
    }
    table
}

pub fn rating_by_year_table(by_year: &[(i32, f64)]) -> Table {
    let mut table = Table::new(["year", "average rating"]);
    for (year, rating) in by_year {
        table.push(vec![year.to_string(), format!("{rating:.2}")]);
    }
    table
}

pub fn histogram_table(bins: &[HistogramBin]) -> Table {
    let mut table = Table::new(["rating", "books"]);
    for (i, bin) in bins.iter().enumerate() {
        let close = if i + 1 == bins.len() { ']' } else { ')' };
        table.push(vec![
            format!("[{:.2}, {:.2}{close}", bin.start, bin.end),
            bin.count.to_string(),
        ]);
    }
    table
}

pub fn top_rated_table(books: &[BookView]) -> Table {
    let mut table = Table::new(["rank", "title", "author", "rating"]);
    for (rank, book) in books.iter().enumerate() {
        table.push(vec![
            (rank + 1).to_string(),
            book.title.clone(),
            book.author.clone(),
            format!("{:.2}", book.average_rating),
        ]);
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn columns_are_padded() {
        let table = authors_table(&[
            Author {
                id: 1,
                name: "Tolkien".to_string(),
            },
            Author {
                id: 12,
                name: "Le Guin".to_string(),
            },
        ]);
        assert_eq!(
            table.to_string(),
            "id  name\n--  -------\n1   Tolkien\n12  Le Guin\n"
        );
    }

    #[test]
    fn empty_table_says_so() {
        let table = authors_table(&[]);
        assert!(table.is_empty());
        assert!(table.to_string().ends_with("(no rows)\n"));
    }

    #[test]
    fn summary_without_books() {
        let rendered = summary_table(&Summary {
            total_books: 0,
            total_authors: 3,
            average_rating: None,
            average_published_year: None,
        })
        .to_string();
        assert!(rendered.contains("average rating          -"));
        assert!(rendered.contains("authors                 3"));
    }

    #[test]
    fn last_histogram_bin_is_closed() {
        let bins = vec![
            HistogramBin {
                start: 0.0,
                end: 2.5,
                count: 1,
            },
            HistogramBin {
                start: 2.5,
                end: 5.0,
                count: 2,
            },
        ];
        let rendered = histogram_table(&bins).to_string();
        assert!(rendered.contains("[0.00, 2.50)  1"));
        assert!(rendered.contains("[2.50, 5.00]  2"));
    }
}
