use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::AuthorDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: Option<String>,
    nationality: String,
    full_name: String,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            nationality: value.nationality,
            full_name: value.full_name,
        }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<Uuid> for AuthorPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<AuthorDto>> for AuthorPresenter {
    type To = Option<AuthorResponse>;
    fn emit(&self, input: Option<AuthorDto>) -> Self::To {
        input.map(AuthorResponse::from)
    }
}

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = axum::Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        axum::Json(input.into_iter().map(AuthorResponse::from).collect())
    }
}

impl Exhaust<Option<Vec<AuthorDto>>> for AuthorPresenter {
    type To = Option<axum::Json<Vec<AuthorResponse>>>;
    fn emit(&self, input: Option<Vec<AuthorDto>>) -> Self::To {
        input.map(|authors| axum::Json(authors.into_iter().map(AuthorResponse::from).collect()))
    }
}

impl Exhaust<Option<()>> for AuthorPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for AuthorPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
