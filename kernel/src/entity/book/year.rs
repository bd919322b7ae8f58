use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub const EARLIEST: i32 = 1440;

    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    pub fn current() -> Self {
        Self(OffsetDateTime::now_utc().year())
    }

    pub fn is_between(&self, earliest: i32, latest: &PublishedYear) -> bool {
        (earliest..=latest.0).contains(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::PublishedYear;

    #[test]
    fn bounds_are_inclusive() {
        let latest = PublishedYear::new(2024);
        assert!(!PublishedYear::new(1439).is_between(PublishedYear::EARLIEST, &latest));
        assert!(PublishedYear::new(1440).is_between(PublishedYear::EARLIEST, &latest));
        assert!(PublishedYear::new(2024).is_between(PublishedYear::EARLIEST, &latest));
        assert!(!PublishedYear::new(2025).is_between(PublishedYear::EARLIEST, &latest));
    }
}
