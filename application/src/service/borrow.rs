use error_stack::Report;
use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, BorrowQuery, DependOnBookQuery, DependOnBorrowQuery, DependOnPatronQuery,
    PatronQuery,
};
use kernel::interface::update::{BorrowModifier, DependOnBorrowModifier};
use kernel::prelude::entity::{
    BookId, Borrow, BorrowDate, BorrowId, DueDate, PatronId, ReturnDate,
};
use kernel::KernelError;

use crate::transfer::{
    BorrowDto, BorrowPageDto, BorrowStatusCountDto, BorrowSummaryDto, CreateBorrowDto,
    DeleteBorrowDto, ExtendDueDateDto, GetAllBorrowDto, GetBookBorrowsDto, GetBorrowDto,
    PatronBorrowCountDto, ReturnBookDto, UpdateBorrowDto,
};

#[async_trait::async_trait]
pub trait GetBorrowService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowQuery<Connection>
    + DependOnClock
{
    async fn get_borrow(
        &self,
        dto: GetBorrowDto,
    ) -> error_stack::Result<Option<BorrowDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.id);
        let borrow = self.borrow_query().find_by_id(&mut connection, &id).await?;

        let today = self.clock().today();
        Ok(borrow.map(|borrow| BorrowDto::from_borrow(borrow, today)))
    }

    /// Listing plus the per-status summary of the same (patron-)filtered set.
    async fn get_borrows(
        &self,
        dto: GetAllBorrowDto,
    ) -> error_stack::Result<BorrowPageDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let patron_id = dto.patron_id.map(PatronId::new);
        let borrows = self
            .borrow_query()
            .find_all(
                &mut connection,
                &dto.limit,
                &dto.offset,
                dto.status.as_ref(),
                patron_id.as_ref(),
            )
            .await?;
        let counts = self
            .borrow_query()
            .count_by_status(&mut connection, patron_id.as_ref())
            .await?;

        let today = self.clock().today();
        Ok(BorrowPageDto {
            stats: BorrowSummaryDto::from(counts.as_slice()),
            results: borrows
                .into_iter()
                .map(|borrow| BorrowDto::from_borrow(borrow, today))
                .collect(),
        })
    }

    async fn get_book_borrows(
        &self,
        dto: GetBookBorrowsDto,
    ) -> error_stack::Result<Vec<BorrowDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book_id = BookId::new(dto.book_id);
        let borrows = self
            .borrow_query()
            .find_by_book_id(&mut connection, &book_id)
            .await?;

        let today = self.clock().today();
        Ok(borrows
            .into_iter()
            .map(|borrow| BorrowDto::from_borrow(borrow, today))
            .collect())
    }
}

impl<Connection: Transaction + Send, T> GetBorrowService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBorrowQuery<Connection> + DependOnClock
{
}

#[async_trait::async_trait]
pub trait CreateBorrowService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPatronQuery<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBorrowModifier<Connection>
    + DependOnClock
{
    async fn create_borrow(&self, dto: CreateBorrowDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let patron_id = PatronId::new(dto.patron_id);
        if self
            .patron_query()
            .find_by_id(&mut connection, &patron_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("borrow references an unknown patron"));
        }
        let book_id = BookId::new(dto.book_id);
        if self
            .book_query()
            .find_by_id(&mut connection, &book_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("borrow references an unknown book"));
        }

        let today = self.clock().today();
        let id = Uuid::new_v4();
        let borrow = Borrow::create(
            BorrowId::new(id),
            patron_id,
            book_id,
            dto.borrow_date.map(BorrowDate::new),
            dto.due_date.map(DueDate::new),
            dto.return_date.map(ReturnDate::new),
            dto.status.unwrap_or_default(),
            today,
        );
        borrow.validate(today)?;
        self.borrow_modifier()
            .create(&mut connection, &borrow)
            .await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreateBorrowService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnPatronQuery<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBorrowModifier<Connection>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait UpdateBorrowService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowQuery<Connection>
    + DependOnBorrowModifier<Connection>
    + DependOnClock
{
    /// Administrative field write. Statuses such as `overdue` and `lost` are
    /// set here directly, gated by `Borrow::validate` rather than a guarded
    /// transition.
    async fn update_borrow(
        &self,
        dto: UpdateBorrowDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.id);
        let Some(mut borrow) = self.borrow_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        borrow.substitute(|borrow| {
            if let Some(borrow_date) = dto.borrow_date {
                *borrow.borrow_date = BorrowDate::new(borrow_date);
            }
            if let Some(due_date) = dto.due_date {
                *borrow.due_date = Some(DueDate::new(due_date));
            }
            if let Some(return_date) = dto.return_date {
                *borrow.return_date = Some(ReturnDate::new(return_date));
            }
            if let Some(status) = dto.status {
                *borrow.status = status;
            }
        });

        borrow.validate(self.clock().today())?;
        self.borrow_modifier()
            .update(&mut connection, &borrow)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdateBorrowService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBorrowQuery<Connection>
        + DependOnBorrowModifier<Connection>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait ReturnBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowQuery<Connection>
    + DependOnBorrowModifier<Connection>
    + DependOnClock
{
    async fn return_book(
        &self,
        dto: ReturnBookDto,
    ) -> error_stack::Result<Option<BorrowDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        // The status precondition is checked against this fresh read, inside
        // the same transaction that persists the change.
        let id = BorrowId::new(dto.id);
        let Some(mut borrow) = self.borrow_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let today = self.clock().today();
        borrow.mark_returned(today)?;
        borrow.validate(today)?;
        self.borrow_modifier()
            .update(&mut connection, &borrow)
            .await?;

        connection.commit().await?;
        Ok(Some(BorrowDto::from_borrow(borrow, today)))
    }
}

impl<Connection: Transaction + Send, T> ReturnBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBorrowQuery<Connection>
        + DependOnBorrowModifier<Connection>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait ExtendDueDateService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowQuery<Connection>
    + DependOnBorrowModifier<Connection>
    + DependOnClock
{
    async fn extend_due_date(
        &self,
        dto: ExtendDueDateDto,
    ) -> error_stack::Result<Option<BorrowDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.id);
        let Some(mut borrow) = self.borrow_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let today = self.clock().today();
        borrow.extend_due_date(dto.days.unwrap_or(Borrow::LOAN_PERIOD_DAYS))?;
        borrow.validate(today)?;
        self.borrow_modifier()
            .update(&mut connection, &borrow)
            .await?;

        connection.commit().await?;
        Ok(Some(BorrowDto::from_borrow(borrow, today)))
    }
}

impl<Connection: Transaction + Send, T> ExtendDueDateService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBorrowQuery<Connection>
        + DependOnBorrowModifier<Connection>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait BorrowStatsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowQuery<Connection>
{
    async fn get_status_stats(
        &self,
    ) -> error_stack::Result<Vec<BorrowStatusCountDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let counts = self
            .borrow_query()
            .count_by_status(&mut connection, None)
            .await?;

        Ok(counts.into_iter().map(BorrowStatusCountDto::from).collect())
    }

    async fn get_patron_stats(
        &self,
    ) -> error_stack::Result<Vec<PatronBorrowCountDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let counts = self.borrow_query().count_by_patron(&mut connection).await?;

        Ok(counts.into_iter().map(PatronBorrowCountDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> BorrowStatsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBorrowQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBorrowService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBorrowModifier<Connection>
{
    /// Administrative override; the lifecycle itself never deletes records.
    async fn delete_borrow(&self, dto: DeleteBorrowDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BorrowId::new(dto.id);
        self.borrow_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteBorrowService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBorrowModifier<Connection>
{
}
