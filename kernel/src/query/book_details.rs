use crate::database::Transaction;
use crate::entity::{BookDetails, BookId, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookDetailsQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookDetails>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookDetails>, KernelError>;
}

pub trait DependOnBookDetailsQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookDetailsQuery: BookDetailsQuery<Connection>;
    fn book_details_query(&self) -> &Self::BookDetailsQuery;
}
