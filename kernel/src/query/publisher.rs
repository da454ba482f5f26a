use crate::database::Transaction;
use crate::entity::{Publisher, PublisherId, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PublisherQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &PublisherId,
    ) -> error_stack::Result<Option<Publisher>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Publisher>, KernelError>;
}

pub trait DependOnPublisherQuery<Connection: Transaction>: Sync + Send + 'static {
    type PublisherQuery: PublisherQuery<Connection>;
    fn publisher_query(&self) -> &Self::PublisherQuery;
}
