use crate::database::Transaction;
use crate::entity::{BookDetails, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookDetailsModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        details: &BookDetails,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        details: &BookDetails,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookDetailsModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookDetailsModifier: BookDetailsModifier<Connection>;
    fn book_details_modifier(&self) -> &Self::BookDetailsModifier;
}
