use axum::extract::Path;
use axum::Json;
use axum_extra::extract::WithRejection;

use crate::error::ErrorStatus;

mod author;
mod book;

pub use self::{author::*, book::*};

pub type JsonBody<T> = WithRejection<Json<T>, ErrorStatus>;
pub type IdPath = WithRejection<Path<i64>, ErrorStatus>;
