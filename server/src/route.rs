mod access;
mod author;
mod book;

pub use self::{access::*, author::*, book::*};
