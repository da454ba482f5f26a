use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    publisher_id: Uuid,
    publication_year: i32,
    category_id: Option<Uuid>,
    #[serde(default)]
    author_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    title: Option<String>,
    publisher_id: Option<Uuid>,
    publication_year: Option<i32>,
    category_id: Option<Uuid>,
    author_ids: Option<Vec<Uuid>>,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: Uuid,
}

impl GetBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: Uuid,
}

impl DeleteBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllBookRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
    publisher: Option<Uuid>,
    category: Option<Uuid>,
    author: Option<Uuid>,
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            publisher_id: input.publisher_id,
            publication_year: input.publication_year,
            category_id: input.category_id,
            author_ids: input.author_ids,
        }
    }
}

impl Intake<(Uuid, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, (id, req): (Uuid, UpdateBookRequest)) -> Self::To {
        UpdateBookDto {
            id,
            title: req.title,
            publisher_id: req.publisher_id,
            publication_year: req.publication_year,
            category_id: req.category_id,
            author_ids: req.author_ids,
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        GetAllBookDto {
            limit: input.limit,
            offset: input.offset,
            publisher_id: input.publisher,
            category_id: input.category,
            author_id: input.author,
        }
    }
}
