mod author;
mod book;

pub use self::{author::*, book::*};
