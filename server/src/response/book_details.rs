use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::BookDetailsDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookDetailsResponse {
    book_id: Uuid,
    isbn: String,
    pages: Option<i32>,
    cover_image_url: Option<String>,
}

impl From<BookDetailsDto> for BookDetailsResponse {
    fn from(value: BookDetailsDto) -> Self {
        Self {
            book_id: value.book_id,
            isbn: value.isbn,
            pages: value.pages,
            cover_image_url: value.cover_image_url,
        }
    }
}

impl IntoResponse for BookDetailsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookDetailsPresenter;

impl Exhaust<Uuid> for BookDetailsPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<BookDetailsDto>> for BookDetailsPresenter {
    type To = Option<BookDetailsResponse>;
    fn emit(&self, input: Option<BookDetailsDto>) -> Self::To {
        input.map(BookDetailsResponse::from)
    }
}

impl Exhaust<Vec<BookDetailsDto>> for BookDetailsPresenter {
    type To = axum::Json<Vec<BookDetailsResponse>>;
    fn emit(&self, input: Vec<BookDetailsDto>) -> Self::To {
        axum::Json(input.into_iter().map(BookDetailsResponse::from).collect())
    }
}

impl Exhaust<Option<()>> for BookDetailsPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for BookDetailsPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
