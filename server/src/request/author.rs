use crate::controller::Intake;
use application::transfer::{CreateAuthorDto, DeleteAuthorDto, GetAuthorDto, UpdateAuthorDto};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    name: String,
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: i64,
}

impl GetAuthorRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    id: i64,
}

impl DeleteAuthorRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl Intake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    fn emit(&self, input: CreateAuthorRequest) -> Self::To {
        CreateAuthorDto { name: input.name }
    }
}

impl Intake<(i64, UpdateAuthorRequest)> for AuthorTransformer {
    type To = UpdateAuthorDto;
    fn emit(&self, input: (i64, UpdateAuthorRequest)) -> Self::To {
        let (id, input) = input;
        UpdateAuthorDto {
            id,
            name: input.name,
        }
    }
}

impl Intake<GetAuthorRequest> for AuthorTransformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetAuthorRequest) -> Self::To {
        GetAuthorDto { id: input.id }
    }
}

impl Intake<DeleteAuthorRequest> for AuthorTransformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteAuthorRequest) -> Self::To {
        DeleteAuthorDto { id: input.id }
    }
}
