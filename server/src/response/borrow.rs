use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::{
    BorrowDto, BorrowPageDto, BorrowStatusCountDto, BorrowSummaryDto, PatronBorrowCountDto,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::BorrowStatus;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BorrowResponse {
    id: Uuid,
    patron_id: Uuid,
    book_id: Uuid,
    borrow_date: Date,
    due_date: Option<Date>,
    return_date: Option<Date>,
    status: BorrowStatus,
    overdue: bool,
}

impl From<BorrowDto> for BorrowResponse {
    fn from(value: BorrowDto) -> Self {
        Self {
            id: value.id,
            patron_id: value.patron_id,
            book_id: value.book_id,
            borrow_date: value.borrow_date,
            due_date: value.due_date,
            return_date: value.return_date,
            status: value.status,
            overdue: value.overdue,
        }
    }
}

impl IntoResponse for BorrowResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowSummaryResponse {
    total_borrows: i64,
    active: i64,
    overdue: i64,
    returned: i64,
}

impl From<BorrowSummaryDto> for BorrowSummaryResponse {
    fn from(value: BorrowSummaryDto) -> Self {
        Self {
            total_borrows: value.total_borrows,
            active: value.active,
            overdue: value.overdue,
            returned: value.returned,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowPageResponse {
    stats: BorrowSummaryResponse,
    results: Vec<BorrowResponse>,
}

impl From<BorrowPageDto> for BorrowPageResponse {
    fn from(value: BorrowPageDto) -> Self {
        Self {
            stats: BorrowSummaryResponse::from(value.stats),
            results: value.results.into_iter().map(BorrowResponse::from).collect(),
        }
    }
}

impl IntoResponse for BorrowPageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowStatusCountResponse {
    status: BorrowStatus,
    count: i64,
}

impl From<BorrowStatusCountDto> for BorrowStatusCountResponse {
    fn from(value: BorrowStatusCountDto) -> Self {
        Self {
            status: value.status,
            count: value.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PatronBorrowCountResponse {
    patron_id: Uuid,
    first_name: String,
    last_name: String,
    total_borrows: i64,
}

impl From<PatronBorrowCountDto> for PatronBorrowCountResponse {
    fn from(value: PatronBorrowCountDto) -> Self {
        Self {
            patron_id: value.patron_id,
            first_name: value.first_name,
            last_name: value.last_name,
            total_borrows: value.total_borrows,
        }
    }
}

pub struct BorrowPresenter;

impl Exhaust<Uuid> for BorrowPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<BorrowDto>> for BorrowPresenter {
    type To = Option<BorrowResponse>;
    fn emit(&self, input: Option<BorrowDto>) -> Self::To {
        input.map(BorrowResponse::from)
    }
}

impl Exhaust<Vec<BorrowDto>> for BorrowPresenter {
    type To = axum::Json<Vec<BorrowResponse>>;
    fn emit(&self, input: Vec<BorrowDto>) -> Self::To {
        axum::Json(input.into_iter().map(BorrowResponse::from).collect())
    }
}

impl Exhaust<Option<Vec<BorrowDto>>> for BorrowPresenter {
    type To = Option<axum::Json<Vec<BorrowResponse>>>;
    fn emit(&self, input: Option<Vec<BorrowDto>>) -> Self::To {
        input.map(|borrows| axum::Json(borrows.into_iter().map(BorrowResponse::from).collect()))
    }
}

impl Exhaust<BorrowPageDto> for BorrowPresenter {
    type To = BorrowPageResponse;
    fn emit(&self, input: BorrowPageDto) -> Self::To {
        BorrowPageResponse::from(input)
    }
}

impl Exhaust<Vec<BorrowStatusCountDto>> for BorrowPresenter {
    type To = axum::Json<Vec<BorrowStatusCountResponse>>;
    fn emit(&self, input: Vec<BorrowStatusCountDto>) -> Self::To {
        axum::Json(
            input
                .into_iter()
                .map(BorrowStatusCountResponse::from)
                .collect(),
        )
    }
}

impl Exhaust<Vec<PatronBorrowCountDto>> for BorrowPresenter {
    type To = axum::Json<Vec<PatronBorrowCountResponse>>;
    fn emit(&self, input: Vec<PatronBorrowCountDto>) -> Self::To {
        axum::Json(
            input
                .into_iter()
                .map(PatronBorrowCountResponse::from)
                .collect(),
        )
    }
}

impl Exhaust<Option<()>> for BorrowPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for BorrowPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
