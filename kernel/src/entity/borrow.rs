mod borrow_date;
mod due_date;
mod id;
mod return_date;
mod status;

pub use self::{borrow_date::*, due_date::*, id::*, return_date::*, status::*};
use crate::entity::{BookId, PatronId};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};
use vodca::References;

/// A loan record linking one patron to one book copy for a bounded period.
///
/// The borrow owns its lifecycle: due-date defaulting on creation, the
/// `active -> returned` transition, due-date extension and overdue detection.
/// `overdue` and `lost` are written through the generic update path and are
/// only checked by [`Borrow::validate`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Borrow {
    id: BorrowId,
    patron_id: PatronId,
    book_id: BookId,
    borrow_date: BorrowDate,
    due_date: Option<DueDate>,
    return_date: Option<ReturnDate>,
    status: BorrowStatus,
}

impl Borrow {
    pub const LOAN_PERIOD_DAYS: i64 = 30;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BorrowId,
        patron_id: PatronId,
        book_id: BookId,
        borrow_date: BorrowDate,
        due_date: Option<DueDate>,
        return_date: Option<ReturnDate>,
        status: BorrowStatus,
    ) -> Self {
        Self {
            id,
            patron_id,
            book_id,
            borrow_date,
            due_date,
            return_date,
            status,
        }
    }

    /// Opens a new loan. An omitted borrow date falls back to `today`, and an
    /// active loan without an explicit due date is due one loan period after
    /// the borrow date. Non-active statuses never get a due date filled in.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: BorrowId,
        patron_id: PatronId,
        book_id: BookId,
        borrow_date: Option<BorrowDate>,
        due_date: Option<DueDate>,
        return_date: Option<ReturnDate>,
        status: BorrowStatus,
        today: Date,
    ) -> Self {
        let borrow_date = borrow_date.unwrap_or_else(|| BorrowDate::new(today));
        let due_date = match (&status, due_date) {
            (BorrowStatus::Active, None) => Some(DueDate::new(
                borrow_date
                    .as_ref()
                    .saturating_add(Duration::days(Self::LOAN_PERIOD_DAYS)),
            )),
            (_, due_date) => due_date,
        };
        Self {
            id,
            patron_id,
            book_id,
            borrow_date,
            due_date,
            return_date,
            status,
        }
    }

    /// Structural invariants checked before every state-changing save.
    /// A violating record is rejected, never silently corrected.
    pub fn validate(&self, today: Date) -> error_stack::Result<(), KernelError> {
        if self.status.is_closed() && self.return_date.is_none() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("return date is required for returned or lost borrows"));
        }
        if let Some(return_date) = &self.return_date {
            if *return_date.as_ref() > today {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable("return date cannot be in the future"));
            }
        }
        Ok(())
    }

    pub fn mark_returned(&mut self, today: Date) -> error_stack::Result<(), KernelError> {
        if self.status != BorrowStatus::Active {
            return Err(Report::new(KernelError::InvalidTransition)
                .attach_printable("only active borrows can be returned"));
        }
        self.substitute(|borrow| {
            *borrow.status = BorrowStatus::Returned;
            *borrow.return_date = Some(ReturnDate::new(today));
        });
        Ok(())
    }

    pub fn extend_due_date(&mut self, days: i64) -> error_stack::Result<(), KernelError> {
        if self.status != BorrowStatus::Active {
            return Err(Report::new(KernelError::InvalidTransition)
                .attach_printable("only active borrows can be extended"));
        }
        let extended = match &self.due_date {
            Some(due_date) => DueDate::new(due_date.as_ref().saturating_add(Duration::days(days))),
            None => {
                return Err(Report::new(KernelError::InvalidState)
                    .attach_printable("cannot extend a borrow without a due date"))
            }
        };
        self.substitute(|borrow| {
            *borrow.due_date = Some(extended);
        });
        Ok(())
    }

    /// Pure query, no transition. True only for an active loan whose due date
    /// already passed.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status == BorrowStatus::Active
            && self
                .due_date
                .as_ref()
                .is_some_and(|due_date| *due_date.as_ref() < today)
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        BookId, Borrow, BorrowDate, BorrowId, BorrowStatus, DueDate, PatronId, ReturnDate,
    };
    use crate::KernelError;

    fn create(
        borrow_date: Option<BorrowDate>,
        due_date: Option<DueDate>,
        return_date: Option<ReturnDate>,
        status: BorrowStatus,
        today: time::Date,
    ) -> Borrow {
        Borrow::create(
            BorrowId::new(Uuid::new_v4()),
            PatronId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            borrow_date,
            due_date,
            return_date,
            status,
            today,
        )
    }

    #[test]
    fn active_borrow_defaults_due_date_to_one_loan_period() {
        let borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        assert_eq!(borrow.due_date(), &Some(DueDate::new(date!(2024 - 01 - 31))));
    }

    #[test]
    fn omitted_borrow_date_falls_back_to_today() {
        let borrow = create(None, None, None, BorrowStatus::Active, date!(2024 - 03 - 10));
        assert_eq!(borrow.borrow_date(), &BorrowDate::new(date!(2024 - 03 - 10)));
        assert_eq!(borrow.due_date(), &Some(DueDate::new(date!(2024 - 04 - 09))));
    }

    #[test]
    fn non_active_borrow_keeps_due_date_empty() {
        let borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            Some(ReturnDate::new(date!(2024 - 01 - 05))),
            BorrowStatus::Returned,
            date!(2024 - 01 - 05),
        );
        assert_eq!(borrow.due_date(), &None);
    }

    #[test]
    fn explicit_due_date_is_left_untouched() {
        let borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            Some(DueDate::new(date!(2024 - 01 - 10))),
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        assert_eq!(borrow.due_date(), &Some(DueDate::new(date!(2024 - 01 - 10))));
    }

    #[test]
    fn closed_borrow_without_return_date_fails_validation() {
        for status in [BorrowStatus::Returned, BorrowStatus::Lost] {
            let borrow = create(None, None, None, status, date!(2024 - 01 - 01));
            let report = borrow.validate(date!(2024 - 01 - 01)).unwrap_err();
            assert!(matches!(report.current_context(), KernelError::Validation));
        }
    }

    #[test]
    fn future_return_date_fails_validation() {
        let borrow = create(
            None,
            None,
            Some(ReturnDate::new(date!(2024 - 02 - 01))),
            BorrowStatus::Returned,
            date!(2024 - 01 - 15),
        );
        let report = borrow.validate(date!(2024 - 01 - 15)).unwrap_err();
        assert!(matches!(report.current_context(), KernelError::Validation));
    }

    #[test]
    fn overdue_only_for_active_with_past_due_date() {
        let today = date!(2024 - 02 - 15);
        let overdue = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            today,
        );
        assert!(overdue.is_overdue(today));

        let running = create(Some(BorrowDate::new(today)), None, None, BorrowStatus::Active, today);
        assert!(!running.is_overdue(today));

        let mut returned = overdue.clone();
        returned.mark_returned(today).unwrap();
        assert!(!returned.is_overdue(today));

        let no_due_date = Borrow::new(
            BorrowId::new(Uuid::new_v4()),
            PatronId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            BorrowDate::new(date!(2024 - 01 - 01)),
            None,
            None,
            BorrowStatus::Active,
        );
        assert!(!no_due_date.is_overdue(today));
    }

    #[test]
    fn returning_an_active_borrow_closes_it_today() {
        let mut borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        borrow.mark_returned(date!(2024 - 01 - 15)).unwrap();
        assert_eq!(borrow.status(), &BorrowStatus::Returned);
        assert_eq!(
            borrow.return_date(),
            &Some(ReturnDate::new(date!(2024 - 01 - 15)))
        );
        borrow.validate(date!(2024 - 01 - 15)).unwrap();
    }

    #[test]
    fn returning_twice_is_rejected() {
        let mut borrow = create(None, None, None, BorrowStatus::Active, date!(2024 - 01 - 01));
        borrow.mark_returned(date!(2024 - 01 - 02)).unwrap();
        let report = borrow.mark_returned(date!(2024 - 01 - 03)).unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidTransition
        ));
    }

    #[test]
    fn extending_moves_the_due_date_forward() {
        let mut borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        borrow.extend_due_date(Borrow::LOAN_PERIOD_DAYS).unwrap();
        assert_eq!(borrow.due_date(), &Some(DueDate::new(date!(2024 - 03 - 01))));
    }

    #[test]
    fn extending_a_returned_borrow_is_rejected() {
        let mut borrow = create(None, None, None, BorrowStatus::Active, date!(2024 - 01 - 01));
        borrow.mark_returned(date!(2024 - 01 - 02)).unwrap();
        let report = borrow.extend_due_date(30).unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidTransition
        ));
    }

    #[test]
    fn extending_without_a_due_date_is_rejected() {
        let mut borrow = Borrow::new(
            BorrowId::new(Uuid::new_v4()),
            PatronId::new(Uuid::new_v4()),
            BookId::new(Uuid::new_v4()),
            BorrowDate::new(date!(2024 - 01 - 01)),
            None,
            None,
            BorrowStatus::Active,
        );
        let report = borrow.extend_due_date(30).unwrap_err();
        assert!(matches!(report.current_context(), KernelError::InvalidState));
    }

    #[test]
    fn borrow_and_return_round_trip() {
        let mut borrow = create(
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        assert_eq!(borrow.due_date(), &Some(DueDate::new(date!(2024 - 01 - 31))));

        borrow.mark_returned(date!(2024 - 01 - 15)).unwrap();
        assert_eq!(borrow.status(), &BorrowStatus::Returned);
        assert_eq!(
            borrow.return_date(),
            &Some(ReturnDate::new(date!(2024 - 01 - 15)))
        );
        borrow.validate(date!(2024 - 01 - 15)).unwrap();
    }
}
