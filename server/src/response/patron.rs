use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::PatronDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PatronResponse {
    id: Uuid,
    card_number: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
    full_name: String,
}

impl From<PatronDto> for PatronResponse {
    fn from(value: PatronDto) -> Self {
        Self {
            id: value.id,
            card_number: value.card_number,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            full_name: value.full_name,
        }
    }
}

impl IntoResponse for PatronResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct PatronPresenter;

impl Exhaust<Uuid> for PatronPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<PatronDto>> for PatronPresenter {
    type To = Option<PatronResponse>;
    fn emit(&self, input: Option<PatronDto>) -> Self::To {
        input.map(PatronResponse::from)
    }
}

impl Exhaust<Vec<PatronDto>> for PatronPresenter {
    type To = axum::Json<Vec<PatronResponse>>;
    fn emit(&self, input: Vec<PatronDto>) -> Self::To {
        axum::Json(input.into_iter().map(PatronResponse::from).collect())
    }
}

impl Exhaust<Option<()>> for PatronPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for PatronPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
