use crate::controller::Intake;
use application::transfer::{
    CreateCategoryDto, DeleteCategoryDto, GetAllCategoryDto, GetCategoryDto, UpdateCategoryDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    name: Option<String>,
}

#[derive(Debug)]
pub struct GetCategoryRequest {
    id: Uuid,
}

impl GetCategoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteCategoryRequest {
    id: Uuid,
}

impl DeleteCategoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllCategoryRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

pub struct CategoryTransformer;

impl Intake<CreateCategoryRequest> for CategoryTransformer {
    type To = CreateCategoryDto;
    fn emit(&self, input: CreateCategoryRequest) -> Self::To {
        CreateCategoryDto { name: input.name }
    }
}

impl Intake<(Uuid, UpdateCategoryRequest)> for CategoryTransformer {
    type To = UpdateCategoryDto;
    fn emit(&self, (id, req): (Uuid, UpdateCategoryRequest)) -> Self::To {
        UpdateCategoryDto { id, name: req.name }
    }
}

impl Intake<GetCategoryRequest> for CategoryTransformer {
    type To = GetCategoryDto;
    fn emit(&self, input: GetCategoryRequest) -> Self::To {
        GetCategoryDto { id: input.id }
    }
}

impl Intake<DeleteCategoryRequest> for CategoryTransformer {
    type To = DeleteCategoryDto;
    fn emit(&self, input: DeleteCategoryRequest) -> Self::To {
        DeleteCategoryDto { id: input.id }
    }
}

impl Intake<GetAllCategoryRequest> for CategoryTransformer {
    type To = GetAllCategoryDto;
    fn emit(&self, input: GetAllCategoryRequest) -> Self::To {
        GetAllCategoryDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}
