use kernel::interface::query::{BorrowStatusCount, PatronBorrowCount};
use kernel::prelude::entity::{Borrow, BorrowStatus, DestructBorrow, SelectLimit, SelectOffset};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct BorrowDto {
    pub id: Uuid,
    pub patron_id: Uuid,
    pub book_id: Uuid,
    pub borrow_date: Date,
    pub due_date: Option<Date>,
    pub return_date: Option<Date>,
    pub status: BorrowStatus,
    pub overdue: bool,
}

impl BorrowDto {
    /// `today` feeds the derived overdue flag, nothing else.
    pub fn from_borrow(value: Borrow, today: Date) -> Self {
        let overdue = value.is_overdue(today);
        let DestructBorrow {
            id,
            patron_id,
            book_id,
            borrow_date,
            due_date,
            return_date,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            patron_id: patron_id.into(),
            book_id: book_id.into(),
            borrow_date: borrow_date.into(),
            due_date: due_date.map(Into::into),
            return_date: return_date.map(Into::into),
            status,
            overdue,
        }
    }
}

/// Per-status tallies shown beside every borrow listing.
#[derive(Debug, Clone, Default)]
pub struct BorrowSummaryDto {
    pub total_borrows: i64,
    pub active: i64,
    pub overdue: i64,
    pub returned: i64,
}

impl From<&[BorrowStatusCount]> for BorrowSummaryDto {
    fn from(counts: &[BorrowStatusCount]) -> Self {
        let mut summary = Self::default();
        for count in counts {
            summary.total_borrows += count.count();
            match count.status() {
                BorrowStatus::Active => summary.active += count.count(),
                BorrowStatus::Overdue => summary.overdue += count.count(),
                BorrowStatus::Returned => summary.returned += count.count(),
                BorrowStatus::Lost => {}
            }
        }
        summary
    }
}

#[derive(Debug, Clone)]
pub struct BorrowPageDto {
    pub stats: BorrowSummaryDto,
    pub results: Vec<BorrowDto>,
}

#[derive(Debug, Clone)]
pub struct BorrowStatusCountDto {
    pub status: BorrowStatus,
    pub count: i64,
}

impl From<BorrowStatusCount> for BorrowStatusCountDto {
    fn from(value: BorrowStatusCount) -> Self {
        Self {
            status: *value.status(),
            count: *value.count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatronBorrowCountDto {
    pub patron_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub total_borrows: i64,
}

impl From<PatronBorrowCount> for PatronBorrowCountDto {
    fn from(value: PatronBorrowCount) -> Self {
        Self {
            patron_id: value.patron_id().as_ref().to_owned(),
            first_name: value.first_name().as_ref().to_owned(),
            last_name: value.last_name().as_ref().to_owned(),
            total_borrows: *value.borrow_count(),
        }
    }
}

pub struct GetBorrowDto {
    pub id: Uuid,
}

pub struct GetAllBorrowDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
    pub status: Option<BorrowStatus>,
    pub patron_id: Option<Uuid>,
}

pub struct GetBookBorrowsDto {
    pub book_id: Uuid,
}

pub struct CreateBorrowDto {
    pub patron_id: Uuid,
    pub book_id: Uuid,
    pub borrow_date: Option<Date>,
    pub due_date: Option<Date>,
    pub return_date: Option<Date>,
    pub status: Option<BorrowStatus>,
}

pub struct UpdateBorrowDto {
    pub id: Uuid,
    pub borrow_date: Option<Date>,
    pub due_date: Option<Date>,
    pub return_date: Option<Date>,
    pub status: Option<BorrowStatus>,
}

pub struct ReturnBookDto {
    pub id: Uuid,
}

pub struct ExtendDueDateDto {
    pub id: Uuid,
    pub days: Option<i64>,
}

pub struct DeleteBorrowDto {
    pub id: Uuid,
}
