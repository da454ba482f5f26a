mod cover_image_url;
mod isbn;
mod pages;

pub use self::{cover_image_url::*, isbn::*, pages::*};
use crate::entity::BookId;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

/// One-to-one extension of a book, keyed by the owning book id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct BookDetails {
    book_id: BookId,
    isbn: Isbn,
    pages: Option<PageCount>,
    cover_image_url: Option<CoverImageUrl>,
}

impl BookDetails {
    pub fn new(
        book_id: BookId,
        isbn: Isbn,
        pages: Option<PageCount>,
        cover_image_url: Option<CoverImageUrl>,
    ) -> Self {
        Self {
            book_id,
            isbn,
            pages,
            cover_image_url,
        }
    }
}
