use kernel::interface::query::BorrowedBook;
use kernel::prelude::entity::{Book, DestructBook, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub publisher_id: Uuid,
    pub publication_year: i32,
    pub category_id: Option<Uuid>,
    pub author_ids: Vec<Uuid>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            publisher_id,
            publication_year,
            category_id,
            author_ids,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            publisher_id: publisher_id.into(),
            publication_year: publication_year.into(),
            category_id: category_id.map(Into::into),
            author_ids: author_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BorrowedBookDto {
    pub book: BookDto,
    pub borrow_count: i64,
}

impl From<BorrowedBook> for BorrowedBookDto {
    fn from(value: BorrowedBook) -> Self {
        Self {
            borrow_count: *value.borrow_count(),
            book: BookDto::from(value.book().clone()),
        }
    }
}

/// Composed read model for the full-info endpoint: the book joined with its
/// publisher, category, authors and detail record.
#[derive(Debug, Clone)]
pub struct BookFullInfoDto {
    pub id: Uuid,
    pub title: String,
    pub publication_year: i32,
    pub publisher: String,
    pub category: Option<String>,
    pub authors: Vec<String>,
    pub isbn: Option<String>,
    pub pages: Option<i32>,
    pub cover_image_url: Option<String>,
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct GetAllBookDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
    pub publisher_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
}

pub struct CreateBookDto {
    pub title: String,
    pub publisher_id: Uuid,
    pub publication_year: i32,
    pub category_id: Option<Uuid>,
    pub author_ids: Vec<Uuid>,
}

pub struct UpdateBookDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub publisher_id: Option<Uuid>,
    pub publication_year: Option<i32>,
    pub category_id: Option<Uuid>,
    pub author_ids: Option<Vec<Uuid>>,
}

pub struct DeleteBookDto {
    pub id: Uuid,
}
