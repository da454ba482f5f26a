use crate::controller::Intake;
use application::transfer::{
    CreatePublisherDto, DeletePublisherDto, GetAllBookDto, GetAllPublisherDto, GetPublisherDto,
    UpdatePublisherDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePublisherRequest {
    name: String,
    email: Option<String>,
    location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePublisherRequest {
    name: Option<String>,
    email: Option<String>,
    location: Option<String>,
}

#[derive(Debug)]
pub struct GetPublisherRequest {
    id: Uuid,
}

impl GetPublisherRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeletePublisherRequest {
    id: Uuid,
}

impl DeletePublisherRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllPublisherRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug)]
pub struct GetPublisherBooksRequest {
    id: Uuid,
}

impl GetPublisherBooksRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct PublisherTransformer;

impl Intake<CreatePublisherRequest> for PublisherTransformer {
    type To = CreatePublisherDto;
    fn emit(&self, input: CreatePublisherRequest) -> Self::To {
        CreatePublisherDto {
            name: input.name,
            email: input.email,
            location: input.location,
        }
    }
}

impl Intake<(Uuid, UpdatePublisherRequest)> for PublisherTransformer {
    type To = UpdatePublisherDto;
    fn emit(&self, (id, req): (Uuid, UpdatePublisherRequest)) -> Self::To {
        UpdatePublisherDto {
            id,
            name: req.name,
            email: req.email,
            location: req.location,
        }
    }
}

impl Intake<GetPublisherRequest> for PublisherTransformer {
    type To = GetPublisherDto;
    fn emit(&self, input: GetPublisherRequest) -> Self::To {
        GetPublisherDto { id: input.id }
    }
}

impl Intake<DeletePublisherRequest> for PublisherTransformer {
    type To = DeletePublisherDto;
    fn emit(&self, input: DeletePublisherRequest) -> Self::To {
        DeletePublisherDto { id: input.id }
    }
}

impl Intake<GetAllPublisherRequest> for PublisherTransformer {
    type To = GetAllPublisherDto;
    fn emit(&self, input: GetAllPublisherRequest) -> Self::To {
        GetAllPublisherDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<GetPublisherBooksRequest> for PublisherTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetPublisherBooksRequest) -> Self::To {
        GetAllBookDto {
            limit: SelectLimit::default(),
            offset: SelectOffset::default(),
            publisher_id: Some(input.id),
            category_id: None,
            author_id: None,
        }
    }
}
