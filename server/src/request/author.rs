use crate::controller::Intake;
use application::transfer::{
    CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAllBookDto, GetAuthorDto,
    UpdateAuthorDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    first_name: String,
    last_name: String,
    email: Option<String>,
    nationality: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    nationality: Option<String>,
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: Uuid,
}

impl GetAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    id: Uuid,
}

impl DeleteAuthorRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllAuthorRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
    search: Option<String>,
}

#[derive(Debug)]
pub struct GetAuthorBooksRequest {
    id: Uuid,
}

impl GetAuthorBooksRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl Intake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    fn emit(&self, input: CreateAuthorRequest) -> Self::To {
        CreateAuthorDto {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            nationality: input.nationality,
        }
    }
}

impl Intake<(Uuid, UpdateAuthorRequest)> for AuthorTransformer {
    type To = UpdateAuthorDto;
    fn emit(&self, (id, req): (Uuid, UpdateAuthorRequest)) -> Self::To {
        UpdateAuthorDto {
            id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            nationality: req.nationality,
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

impl Intake<GetAllAuthorRequest> for AuthorTransformer {
    type To = GetAllAuthorDto;
    fn emit(&self, input: GetAllAuthorRequest) -> Self::To {
        GetAllAuthorDto {
            limit: input.limit,
            offset: input.offset,
            search: input.search,
        }
    }
}

impl Intake<GetAuthorBooksRequest> for AuthorTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAuthorBooksRequest) -> Self::To {
        GetAllBookDto {
            limit: SelectLimit::default(),
            offset: SelectOffset::default(),
            publisher_id: None,
            category_id: None,
            author_id: Some(input.id),
        }
    }
}
