use crate::database::Transaction;
use crate::entity::{Publisher, PublisherId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PublisherModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        publisher: &Publisher,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        publisher: &Publisher,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        id: &PublisherId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPublisherModifier<Connection: Transaction>: 'static + Sync + Send {
    type PublisherModifier: PublisherModifier<Connection>;
    fn publisher_modifier(&self) -> &Self::PublisherModifier;
}
