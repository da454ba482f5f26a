use crate::database::Transaction;
use crate::entity::{Patron, PatronId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PatronModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        patron: &Patron,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        patron: &Patron,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        id: &PatronId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPatronModifier<Connection: Transaction>: 'static + Sync + Send {
    type PatronModifier: PatronModifier<Connection>;
    fn patron_modifier(&self) -> &Self::PatronModifier;
}
