use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Fromln, AsRefln)]
pub struct AverageRating(f64);

impl AverageRating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    pub fn new(rating: impl Into<f64>) -> Self {
        Self(rating.into())
    }

    pub fn is_in_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}
