use std::collections::BTreeMap;

use crate::join::BookView;
use crate::model::{Author, Book};

pub const RATING_BINS: usize = 20;
pub const TOP_RATED: usize = 10;
const RATING_MIN: f64 = 0.0;
const RATING_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_books: usize,
    pub total_authors: usize,
    pub average_rating: Option<f64>,
    pub average_published_year: Option<f64>,
}

pub fn summarize(authors: &[Author], books: &[Book]) -> Summary {
    Summary {
        total_books: books.len(),
        total_authors: authors.len(),
        average_rating: mean(books.iter().map(|b| b.average_rating)),
        average_published_year: mean(books.iter().map(|b| f64::from(b.published_year))),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn books_per_author(books: &[BookView]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for book in books {
        match counts.iter_mut().find(|(name, _)| *name == book.author) {
            Some((_, count)) => *count += 1,
            None => counts.push((book.author.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn average_rating_by_year(books: &[BookView]) -> Vec<(i32, f64)> {
    let mut years: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for book in books {
        let entry = years.entry(book.published_year).or_insert((0.0, 0));
        entry.0 += book.average_rating;
        entry.1 += 1;
    }
    years
        .into_iter()
        .map(|(year, (sum, count))| (year, sum / count as f64))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

// Equal-width bins over [0, 5]. Every bin is half open except the last,
// which also takes 5.0. Ratings outside the range are skipped.
pub fn rating_histogram(books: &[BookView], bins: usize) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let width = (RATING_MAX - RATING_MIN) / bins as f64;
    let mut histogram = (0..bins)
        .map(|i| HistogramBin {
            start: RATING_MIN + width * i as f64,
            end: RATING_MIN + width * (i + 1) as f64,
            count: 0,
        })
        .collect::<Vec<_>>();
    for rating in books.iter().map(|b| b.average_rating) {
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            continue;
        }
        let index = (((rating - RATING_MIN) / width) as usize).min(bins - 1);
        histogram[index].count += 1;
    }
    histogram
}

// Highest rated first. The sort is stable, so ties keep input order.
pub fn top_rated(books: &[BookView], n: usize) -> Vec<BookView> {
    let mut sorted = books.to_vec();
    sorted.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    sorted.truncate(n);
    sorted
}
