use crate::controller::Intake;
use application::transfer::{
    CreatePatronDto, DeletePatronDto, GetAllPatronDto, GetPatronBorrowsDto, GetPatronDto,
    UpdatePatronDto,
};
use kernel::prelude::entity::{BorrowStatus, SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePatronRequest {
    card_number: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePatronRequest {
    card_number: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
}

#[derive(Debug)]
pub struct GetPatronRequest {
    id: Uuid,
}

impl GetPatronRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeletePatronRequest {
    id: Uuid,
}

impl DeletePatronRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllPatronRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

#[derive(Debug, Deserialize)]
pub struct PatronBorrowsQuery {
    status: Option<BorrowStatus>,
}

pub struct PatronTransformer;

impl Intake<CreatePatronRequest> for PatronTransformer {
    type To = CreatePatronDto;
    fn emit(&self, input: CreatePatronRequest) -> Self::To {
        CreatePatronDto {
            card_number: input.card_number,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
        }
    }
}

impl Intake<(Uuid, UpdatePatronRequest)> for PatronTransformer {
    type To = UpdatePatronDto;
    fn emit(&self, (id, req): (Uuid, UpdatePatronRequest)) -> Self::To {
        UpdatePatronDto {
            id,
            card_number: req.card_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

impl Intake<GetPatronRequest> for PatronTransformer {
    type To = GetPatronDto;
    fn emit(&self, input: GetPatronRequest) -> Self::To {
        GetPatronDto { id: input.id }
    }
}

impl Intake<DeletePatronRequest> for PatronTransformer {
    type To = DeletePatronDto;
    fn emit(&self, input: DeletePatronRequest) -> Self::To {
        DeletePatronDto { id: input.id }
    }
}

impl Intake<GetAllPatronRequest> for PatronTransformer {
    type To = GetAllPatronDto;
    fn emit(&self, input: GetAllPatronRequest) -> Self::To {
        GetAllPatronDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}

impl Intake<(Uuid, PatronBorrowsQuery)> for PatronTransformer {
    type To = GetPatronBorrowsDto;
    fn emit(&self, (id, query): (Uuid, PatronBorrowsQuery)) -> Self::To {
        GetPatronBorrowsDto {
            patron_id: id,
            status: query.status,
        }
    }
}
