use kernel::prelude::entity::{BookDetails, DestructBookDetails, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BookDetailsDto {
    pub book_id: Uuid,
    pub isbn: String,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
}

impl From<BookDetails> for BookDetailsDto {
    fn from(value: BookDetails) -> Self {
        let DestructBookDetails {
            book_id,
            isbn,
            pages,
            cover_image_url,
        } = value.into_destruct();
        Self {
            book_id: book_id.into(),
            isbn: isbn.into(),
            pages: pages.map(Into::into),
            cover_image_url: cover_image_url.map(Into::into),
        }
    }
}

pub struct GetBookDetailsDto {
    pub book_id: Uuid,
}

pub struct GetAllBookDetailsDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDetailsDto {
    pub book_id: Uuid,
    pub isbn: String,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
}

pub struct UpdateBookDetailsDto {
    pub book_id: Uuid,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
}

pub struct DeleteBookDetailsDto {
    pub book_id: Uuid,
}
