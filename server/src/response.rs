mod author;
mod book;
mod book_details;
mod borrow;
mod category;
mod patron;
mod publisher;

pub use self::{
    author::*, book::*, book_details::*, borrow::*, category::*, patron::*, publisher::*,
};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: Uuid,
}

impl CreatedResponse {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}
