use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::PublisherDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PublisherResponse {
    id: Uuid,
    name: String,
    email: Option<String>,
    location: Option<String>,
}

impl From<PublisherDto> for PublisherResponse {
    fn from(value: PublisherDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            location: value.location,
        }
    }
}

impl IntoResponse for PublisherResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct PublisherPresenter;

impl Exhaust<Uuid> for PublisherPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<PublisherDto>> for PublisherPresenter {
    type To = Option<PublisherResponse>;
    fn emit(&self, input: Option<PublisherDto>) -> Self::To {
        input.map(PublisherResponse::from)
    }
}

impl Exhaust<Vec<PublisherDto>> for PublisherPresenter {
    type To = axum::Json<Vec<PublisherResponse>>;
    fn emit(&self, input: Vec<PublisherDto>) -> Self::To {
        axum::Json(input.into_iter().map(PublisherResponse::from).collect())
    }
}

impl Exhaust<Option<()>> for PublisherPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for PublisherPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
