use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::{CategoryBookCountDto, CategoryDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    id: Uuid,
    name: String,
}

impl From<CategoryDto> for CategoryResponse {
    fn from(value: CategoryDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl IntoResponse for CategoryResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryBookCountResponse {
    id: Uuid,
    name: String,
    book_count: i64,
}

impl From<CategoryBookCountDto> for CategoryBookCountResponse {
    fn from(value: CategoryBookCountDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            book_count: value.book_count,
        }
    }
}

pub struct CategoryPresenter;

impl Exhaust<Uuid> for CategoryPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<CategoryDto>> for CategoryPresenter {
    type To = Option<CategoryResponse>;
    fn emit(&self, input: Option<CategoryDto>) -> Self::To {
        input.map(CategoryResponse::from)
    }
}

impl Exhaust<Vec<CategoryDto>> for CategoryPresenter {
    type To = axum::Json<Vec<CategoryResponse>>;
    fn emit(&self, input: Vec<CategoryDto>) -> Self::To {
        axum::Json(input.into_iter().map(CategoryResponse::from).collect())
    }
}

impl Exhaust<Vec<CategoryBookCountDto>> for CategoryPresenter {
    type To = axum::Json<Vec<CategoryBookCountResponse>>;
    fn emit(&self, input: Vec<CategoryBookCountDto>) -> Self::To {
        axum::Json(
            input
                .into_iter()
                .map(CategoryBookCountResponse::from)
                .collect(),
        )
    }
}

impl Exhaust<Option<()>> for CategoryPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for CategoryPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
