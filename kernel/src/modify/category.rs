use crate::database::Transaction;
use crate::entity::{Category, CategoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        id: &CategoryId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCategoryModifier<Connection: Transaction>: 'static + Sync + Send {
    type CategoryModifier: CategoryModifier<Connection>;
    fn category_modifier(&self) -> &Self::CategoryModifier;
}
