use crate::controller::Intake;
use application::transfer::{
    CreateBorrowDto, DeleteBorrowDto, ExtendDueDateDto, GetAllBorrowDto, GetBookBorrowsDto,
    GetBorrowDto, ReturnBookDto, UpdateBorrowDto,
};
use kernel::prelude::entity::{BorrowStatus, SelectLimit, SelectOffset};
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateBorrowRequest {
    patron_id: Uuid,
    book_id: Uuid,
    borrow_date: Option<Date>,
    due_date: Option<Date>,
    return_date: Option<Date>,
    status: Option<BorrowStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBorrowRequest {
    borrow_date: Option<Date>,
    due_date: Option<Date>,
    return_date: Option<Date>,
    status: Option<BorrowStatus>,
}

#[derive(Debug)]
pub struct GetBorrowRequest {
    id: Uuid,
}

impl GetBorrowRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBorrowRequest {
    id: Uuid,
}

impl DeleteBorrowRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllBorrowRequest {
    #[serde(default)]
    limit: SelectLimit,
    #[serde(default)]
    offset: SelectOffset,
    status: Option<BorrowStatus>,
    patron: Option<Uuid>,
}

#[derive(Debug)]
pub struct ReturnBookRequest {
    id: Uuid,
}

impl ReturnBookRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtendDueDateRequest {
    pub days: Option<i64>,
}

#[derive(Debug)]
pub struct GetBookBorrowsRequest {
    book_id: Uuid,
}

impl GetBookBorrowsRequest {
    pub fn new(book_id: Uuid) -> Self {
        Self { book_id }
    }
}

pub struct BorrowTransformer;

impl Intake<CreateBorrowRequest> for BorrowTransformer {
    type To = CreateBorrowDto;
    fn emit(&self, input: CreateBorrowRequest) -> Self::To {
        CreateBorrowDto {
            patron_id: input.patron_id,
            book_id: input.book_id,
            borrow_date: input.borrow_date,
            due_date: input.due_date,
            return_date: input.return_date,
            status: input.status,
        }
    }
}

impl Intake<(Uuid, UpdateBorrowRequest)> for BorrowTransformer {
    type To = UpdateBorrowDto;
    fn emit(&self, (id, req): (Uuid, UpdateBorrowRequest)) -> Self::To {
        UpdateBorrowDto {
            id,
            borrow_date: req.borrow_date,
            due_date: req.due_date,
            return_date: req.return_date,
            status: req.status,
        }
    }
}

impl Intake<GetBorrowRequest> for BorrowTransformer {
    type To = GetBorrowDto;
    fn emit(&self, input: GetBorrowRequest) -> Self::To {
        GetBorrowDto { id: input.id }
    }
}

impl Intake<DeleteBorrowRequest> for BorrowTransformer {
    type To = DeleteBorrowDto;
    fn emit(&self, input: DeleteBorrowRequest) -> Self::To {
        DeleteBorrowDto { id: input.id }
    }
}

impl Intake<GetAllBorrowRequest> for BorrowTransformer {
    type To = GetAllBorrowDto;
    fn emit(&self, input: GetAllBorrowRequest) -> Self::To {
        GetAllBorrowDto {
            limit: input.limit,
            offset: input.offset,
            status: input.status,
            patron_id: input.patron,
        }
    }
}

impl Intake<ReturnBookRequest> for BorrowTransformer {
    type To = ReturnBookDto;
    fn emit(&self, input: ReturnBookRequest) -> Self::To {
        ReturnBookDto { id: input.id }
    }
}

impl Intake<(Uuid, Option<ExtendDueDateRequest>)> for BorrowTransformer {
    type To = ExtendDueDateDto;
    fn emit(&self, (id, req): (Uuid, Option<ExtendDueDateRequest>)) -> Self::To {
        ExtendDueDateDto {
            id,
            days: req.and_then(|req| req.days),
        }
    }
}

impl Intake<GetBookBorrowsRequest> for BorrowTransformer {
    type To = GetBookBorrowsDto;
    fn emit(&self, input: GetBookBorrowsRequest) -> Self::To {
        GetBookBorrowsDto {
            book_id: input.book_id,
        }
    }
}
