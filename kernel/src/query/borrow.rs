use vodca::References;

use crate::database::Transaction;
use crate::entity::{
    BookId, Borrow, BorrowId, BorrowStatus, FirstName, LastName, PatronId, SelectLimit,
    SelectOffset,
};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct BorrowStatusCount {
    status: BorrowStatus,
    count: i64,
}

impl BorrowStatusCount {
    pub fn new(status: BorrowStatus, count: i64) -> Self {
        Self { status, count }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct PatronBorrowCount {
    patron_id: PatronId,
    first_name: FirstName,
    last_name: LastName,
    borrow_count: i64,
}

impl PatronBorrowCount {
    pub fn new(
        patron_id: PatronId,
        first_name: FirstName,
        last_name: LastName,
        borrow_count: i64,
    ) -> Self {
        Self {
            patron_id,
            first_name,
            last_name,
            borrow_count,
        }
    }
}

#[async_trait::async_trait]
pub trait BorrowQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BorrowId,
    ) -> error_stack::Result<Option<Borrow>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
        status: Option<&BorrowStatus>,
        patron_id: Option<&PatronId>,
    ) -> error_stack::Result<Vec<Borrow>, KernelError>;
    async fn find_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Borrow>, KernelError>;
    async fn find_by_patron_id(
        &self,
        con: &mut Connection,
        patron_id: &PatronId,
        status: Option<&BorrowStatus>,
    ) -> error_stack::Result<Vec<Borrow>, KernelError>;
    /// Tally per status, optionally narrowed to one patron.
    async fn count_by_status(
        &self,
        con: &mut Connection,
        patron_id: Option<&PatronId>,
    ) -> error_stack::Result<Vec<BorrowStatusCount>, KernelError>;
    async fn count_by_patron(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<PatronBorrowCount>, KernelError>;
}

pub trait DependOnBorrowQuery<Connection: Transaction>: Sync + Send + 'static {
    type BorrowQuery: BorrowQuery<Connection>;
    fn borrow_query(&self) -> &Self::BorrowQuery;
}
