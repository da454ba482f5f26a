use crate::controller::Intake;
use application::transfer::{
    CreateBookDetailsDto, DeleteBookDetailsDto, GetAllBookDetailsDto, GetBookDetailsDto,
    UpdateBookDetailsDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBookDetailsRequest {
    book_id: Uuid,
    isbn: String,
    pages: Option<i32>,
    cover_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookDetailsRequest {
    isbn: Option<String>,
    pages: Option<i32>,
    cover_image_url: Option<String>,
}

#[derive(Debug)]
pub struct GetBookDetailsRequest {
    book_id: Uuid,
}

impl GetBookDetailsRequest {
    pub fn new(book_id: Uuid) -> Self {
        Self { book_id }
    }
}

#[derive(Debug)]
pub struct DeleteBookDetailsRequest {
    book_id: Uuid,
}

impl DeleteBookDetailsRequest {
    pub fn new(book_id: Uuid) -> Self {
        Self { book_id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllBookDetailsRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
}

pub struct BookDetailsTransformer;

impl Intake<CreateBookDetailsRequest> for BookDetailsTransformer {
    type To = CreateBookDetailsDto;
    fn emit(&self, input: CreateBookDetailsRequest) -> Self::To {
        CreateBookDetailsDto {
            book_id: input.book_id,
            isbn: input.isbn,
            pages: input.pages,
            cover_image_url: input.cover_image_url,
        }
    }
}

impl Intake<(Uuid, UpdateBookDetailsRequest)> for BookDetailsTransformer {
    type To = UpdateBookDetailsDto;
    fn emit(&self, (book_id, req): (Uuid, UpdateBookDetailsRequest)) -> Self::To {
        UpdateBookDetailsDto {
            book_id,
            isbn: req.isbn,
            pages: req.pages,
            cover_image_url: req.cover_image_url,
        }
    }
}

impl Intake<GetBookDetailsRequest> for BookDetailsTransformer {
    type To = GetBookDetailsDto;
    fn emit(&self, input: GetBookDetailsRequest) -> Self::To {
        GetBookDetailsDto {
            book_id: input.book_id,
        }
    }
}

impl Intake<DeleteBookDetailsRequest> for BookDetailsTransformer {
    type To = DeleteBookDetailsDto;
    fn emit(&self, input: DeleteBookDetailsRequest) -> Self::To {
        DeleteBookDetailsDto {
            book_id: input.book_id,
        }
    }
}

impl Intake<GetAllBookDetailsRequest> for BookDetailsTransformer {
    type To = GetAllBookDetailsDto;
    fn emit(&self, input: GetAllBookDetailsRequest) -> Self::To {
        GetAllBookDetailsDto {
            limit: input.limit,
            offset: input.offset,
        }
    }
}
