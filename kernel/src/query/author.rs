use crate::database::Transaction;
use crate::entity::{Author, AuthorId, SelectLimit, SelectOffset};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError>;
    /// Case-insensitive substring match over first and last names.
    async fn search_by_name(
        &self,
        con: &mut Connection,
        term: &str,
    ) -> error_stack::Result<Vec<Author>, KernelError>;
}

pub trait DependOnAuthorQuery<Connection: Transaction>: Sync + Send + 'static {
    type AuthorQuery: AuthorQuery<Connection>;
    fn author_query(&self) -> &Self::AuthorQuery;
}
