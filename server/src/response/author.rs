use crate::controller::Exhaust;
use application::transfer::AuthorDto;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i64,
    name: String,
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

pub struct AuthorPresenter;

impl Exhaust<AuthorDto> for AuthorPresenter {
    type To = AuthorResponse;
    fn emit(&self, input: AuthorDto) -> Self::To {
        AuthorResponse::from(input)
    }
}

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = axum::Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(AuthorResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
