use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::{BookDto, BookFullInfoDto, BorrowedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    publisher_id: Uuid,
    publication_year: i32,
    category_id: Option<Uuid>,
    author_ids: Vec<Uuid>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            publisher_id: value.publisher_id,
            publication_year: value.publication_year,
            category_id: value.category_id,
            author_ids: value.author_ids,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowedBookResponse {
    #[serde(flatten)]
    book: BookResponse,
    borrow_count: i64,
}

impl From<BorrowedBookDto> for BorrowedBookResponse {
    fn from(value: BorrowedBookDto) -> Self {
        Self {
            book: BookResponse::from(value.book),
            borrow_count: value.borrow_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookFullInfoResponse {
    id: Uuid,
    title: String,
    publication_year: i32,
    publisher: String,
    category: Option<String>,
    authors: Vec<String>,
    isbn: Option<String>,
    pages: Option<i32>,
    cover_image_url: Option<String>,
}

impl From<BookFullInfoDto> for BookFullInfoResponse {
    fn from(value: BookFullInfoDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            publication_year: value.publication_year,
            publisher: value.publisher,
            category: value.category,
            authors: value.authors,
            isbn: value.isbn,
            pages: value.pages,
            cover_image_url: value.cover_image_url,
        }
    }
}

impl IntoResponse for BookFullInfoResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<Uuid> for BookPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        axum::Json(input.into_iter().map(BookResponse::from).collect())
    }
}

impl Exhaust<Vec<BorrowedBookDto>> for BookPresenter {
    type To = axum::Json<Vec<BorrowedBookResponse>>;
    fn emit(&self, input: Vec<BorrowedBookDto>) -> Self::To {
        axum::Json(input.into_iter().map(BorrowedBookResponse::from).collect())
    }
}

impl Exhaust<Option<BookFullInfoDto>> for BookPresenter {
    type To = Option<BookFullInfoResponse>;
    fn emit(&self, input: Option<BookFullInfoDto>) -> Self::To {
        input.map(BookFullInfoResponse::from)
    }
}

impl Exhaust<Option<()>> for BookPresenter {
    type To = Option<()>;
    fn emit(&self, input: Option<()>) -> Self::To {
        input
    }
}

impl Exhaust<()> for BookPresenter {
    type To = ();
    fn emit(&self, input: ()) -> Self::To {
        input
    }
}
