use crate::database::Transaction;
use crate::entity::{Borrow, BorrowId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BorrowModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError>;
    /// Administrative override, not part of the loan lifecycle.
    async fn delete(
        &self,
        con: &mut Connection,
        id: &BorrowId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBorrowModifier<Connection: Transaction>: 'static + Sync + Send {
    type BorrowModifier: BorrowModifier<Connection>;
    fn borrow_modifier(&self) -> &Self::BorrowModifier;
}
