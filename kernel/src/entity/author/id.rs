use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Fromln, AsRefln)]
pub struct AuthorId(i64);

impl AuthorId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
