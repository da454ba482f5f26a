mod id;
mod publication_year;
mod title;

pub use self::{id::*, publication_year::*, title::*};
use crate::entity::{AuthorId, CategoryId, PublisherId};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    publisher_id: PublisherId,
    publication_year: PublicationYear,
    category_id: Option<CategoryId>,
    author_ids: Vec<AuthorId>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        publisher_id: PublisherId,
        publication_year: PublicationYear,
        category_id: Option<CategoryId>,
        author_ids: Vec<AuthorId>,
    ) -> Self {
        Self {
            id,
            title,
            publisher_id,
            publication_year,
            category_id,
            author_ids,
        }
    }
}
