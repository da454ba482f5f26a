use vodca::References;

use crate::database::Transaction;
use crate::entity::{Category, CategoryId, CategoryName, SelectLimit, SelectOffset};
use crate::KernelError;

/// Per-category book tally for the statistics endpoint.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct CategoryBookCount {
    category_id: CategoryId,
    name: CategoryName,
    book_count: i64,
}

impl CategoryBookCount {
    pub fn new(category_id: CategoryId, name: CategoryName, book_count: i64) -> Self {
        Self {
            category_id,
            name,
            book_count,
        }
    }
}

#[async_trait::async_trait]
pub trait CategoryQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Category>, KernelError>;
    async fn count_books(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<CategoryBookCount>, KernelError>;
}

pub trait DependOnCategoryQuery<Connection: Transaction>: Sync + Send + 'static {
    type CategoryQuery: CategoryQuery<Connection>;
    fn category_query(&self) -> &Self::CategoryQuery;
}
