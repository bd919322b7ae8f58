use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct GenreId(i32);

impl GenreId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookGenres(Vec<GenreId>);

impl BookGenres {
    pub fn new(genres: impl IntoIterator<Item = GenreId>) -> Self {
        let mut unique = Vec::new();
        for genre in genres {
            if !unique.contains(&genre) {
                unique.push(genre);
            }
        }
        Self(unique)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_raw(&self) -> Vec<i32> {
        self.0.iter().map(|genre| *genre.as_ref()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::{BookGenres, GenreId};

    #[test]
    fn duplicates_collapse_in_order() {
        let genres = BookGenres::new([3, 1, 3, 2, 1].map(GenreId::new));
        assert_eq!(genres.to_raw(), vec![3, 1, 2]);
    }
}
