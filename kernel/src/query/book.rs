use vodca::References;

use crate::database::Transaction;
use crate::entity::{AuthorId, Book, BookId, CategoryId, PublisherId, SelectLimit, SelectOffset};
use crate::KernelError;

/// A book together with how often it has been borrowed.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct BorrowedBook {
    book: Book,
    borrow_count: i64,
}

impl BorrowedBook {
    pub fn new(book: Book, borrow_count: i64) -> Self {
        Self { book, borrow_count }
    }
}

#[async_trait::async_trait]
pub trait BookQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_publisher_id(
        &self,
        con: &mut Connection,
        publisher_id: &PublisherId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_category_id(
        &self,
        con: &mut Connection,
        category_id: &CategoryId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_by_author_id(
        &self,
        con: &mut Connection,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
    async fn find_most_borrowed(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
    ) -> error_stack::Result<Vec<BorrowedBook>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
