use crate::database::Transaction;
use crate::entity::{Patron, PatronId, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait PatronQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &PatronId,
    ) -> error_stack::Result<Option<Patron>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Patron>, KernelError>;
}

pub trait DependOnPatronQuery<Connection: Transaction>: Sync + Send + 'static {
    type PatronQuery: PatronQuery<Connection>;
    fn patron_query(&self) -> &Self::PatronQuery;
}
