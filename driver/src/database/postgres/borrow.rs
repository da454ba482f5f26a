use std::str::FromStr;

use sqlx::PgConnection;
use time::Date;
use uuid::Uuid;

use kernel::interface::query::{BorrowQuery, BorrowStatusCount, PatronBorrowCount};
use kernel::interface::update::BorrowModifier;
use kernel::prelude::entity::{
    BookId, Borrow, BorrowDate, BorrowId, BorrowStatus, DueDate, FirstName, LastName, PatronId,
    ReturnDate, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBorrowRepository;

#[async_trait::async_trait]
impl BorrowQuery<PostgresTransaction> for PostgresBorrowRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BorrowId,
    ) -> error_stack::Result<Option<Borrow>, KernelError> {
        PgBorrowInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
        status: Option<&BorrowStatus>,
        patron_id: Option<&PatronId>,
    ) -> error_stack::Result<Vec<Borrow>, KernelError> {
        PgBorrowInternal::find_all(con.connection(), limit, offset, status, patron_id)
            .await
            .convert_error()
    }

    async fn find_by_book_id(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Borrow>, KernelError> {
        PgBorrowInternal::find_by_book_id(con.connection(), book_id)
            .await
            .convert_error()
    }

    async fn find_by_patron_id(
        &self,
        con: &mut PostgresTransaction,
        patron_id: &PatronId,
        status: Option<&BorrowStatus>,
    ) -> error_stack::Result<Vec<Borrow>, KernelError> {
        PgBorrowInternal::find_by_patron_id(con.connection(), patron_id, status)
            .await
            .convert_error()
    }

    async fn count_by_status(
        &self,
        con: &mut PostgresTransaction,
        patron_id: Option<&PatronId>,
    ) -> error_stack::Result<Vec<BorrowStatusCount>, KernelError> {
        PgBorrowInternal::count_by_status(con.connection(), patron_id)
            .await
            .convert_error()
    }

    async fn count_by_patron(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<PatronBorrowCount>, KernelError> {
        PgBorrowInternal::count_by_patron(con.connection())
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BorrowModifier<PostgresTransaction> for PostgresBorrowRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowInternal::create(con.connection(), borrow)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        borrow: &Borrow,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowInternal::update(con.connection(), borrow)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &BorrowId,
    ) -> error_stack::Result<(), KernelError> {
        PgBorrowInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BorrowRow {
    id: Uuid,
    patron_id: Uuid,
    book_id: Uuid,
    borrow_date: Date,
    due_date: Option<Date>,
    return_date: Option<Date>,
    status: String,
}

impl TryFrom<BorrowRow> for Borrow {
    type Error = DriverError;

    fn try_from(value: BorrowRow) -> Result<Self, Self::Error> {
        let status = BorrowStatus::from_str(&value.status).map_err(|_| {
            DriverError::Conversion(anyhow::anyhow!("unknown borrow status: {}", value.status))
        })?;
        Ok(Borrow::new(
            BorrowId::new(value.id),
            PatronId::new(value.patron_id),
            BookId::new(value.book_id),
            BorrowDate::new(value.borrow_date),
            value.due_date.map(DueDate::new),
            value.return_date.map(ReturnDate::new),
            status,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct BorrowStatusCountRow {
    status: String,
    count: i64,
}

impl TryFrom<BorrowStatusCountRow> for BorrowStatusCount {
    type Error = DriverError;

    fn try_from(value: BorrowStatusCountRow) -> Result<Self, Self::Error> {
        let status = BorrowStatus::from_str(&value.status).map_err(|_| {
            DriverError::Conversion(anyhow::anyhow!("unknown borrow status: {}", value.status))
        })?;
        Ok(BorrowStatusCount::new(status, value.count))
    }
}

#[derive(sqlx::FromRow)]
struct PatronBorrowCountRow {
    patron_id: Uuid,
    first_name: String,
    last_name: String,
    borrow_count: i64,
}

impl From<PatronBorrowCountRow> for PatronBorrowCount {
    fn from(value: PatronBorrowCountRow) -> Self {
        PatronBorrowCount::new(
            PatronId::new(value.patron_id),
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            value.borrow_count,
        )
    }
}

pub(in crate::database) struct PgBorrowInternal;

impl PgBorrowInternal {
    async fn find_by_id(con: &mut PgConnection, id: &BorrowId) -> Result<Option<Borrow>, DriverError> {
        let row = sqlx::query_as::<_, BorrowRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                patron_id,
                book_id,
                borrow_date,
                due_date,
                return_date,
                status
            FROM
                borrows
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Borrow::try_from).transpose()
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
        status: Option<&BorrowStatus>,
        patron_id: Option<&PatronId>,
    ) -> Result<Vec<Borrow>, DriverError> {
        let rows = sqlx::query_as::<_, BorrowRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                patron_id,
                book_id,
                borrow_date,
                due_date,
                return_date,
                status
            FROM
                borrows
            WHERE
                ($3::TEXT IS NULL OR status = $3)
                AND ($4::UUID IS NULL OR patron_id = $4)
            ORDER BY
                borrow_date DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .bind(status.map(BorrowStatus::as_str))
        .bind(patron_id.map(|id| id.as_ref()))
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Borrow::try_from).collect()
    }

    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> Result<Vec<Borrow>, DriverError> {
        let rows = sqlx::query_as::<_, BorrowRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                patron_id,
                book_id,
                borrow_date,
                due_date,
                return_date,
                status
            FROM
                borrows
            WHERE
                book_id = $1
            ORDER BY
                borrow_date DESC, id
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Borrow::try_from).collect()
    }

    async fn find_by_patron_id(
        con: &mut PgConnection,
        patron_id: &PatronId,
        status: Option<&BorrowStatus>,
    ) -> Result<Vec<Borrow>, DriverError> {
        let rows = sqlx::query_as::<_, BorrowRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                patron_id,
                book_id,
                borrow_date,
                due_date,
                return_date,
                status
            FROM
                borrows
            WHERE
                patron_id = $1
                AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY
                borrow_date DESC, id
            "#,
        )
        .bind(patron_id.as_ref())
        .bind(status.map(BorrowStatus::as_str))
        .fetch_all(con)
        .await?;
        rows.into_iter().map(Borrow::try_from).collect()
    }

    async fn count_by_status(
        con: &mut PgConnection,
        patron_id: Option<&PatronId>,
    ) -> Result<Vec<BorrowStatusCount>, DriverError> {
        let rows = sqlx::query_as::<_, BorrowStatusCountRow>(
            // language=postgresql
            r#"
            SELECT
                status,
                COUNT(id) AS count
            FROM
                borrows
            WHERE
                ($1::UUID IS NULL OR patron_id = $1)
            GROUP BY
                status
            ORDER BY
                status
            "#,
        )
        .bind(patron_id.map(|id| id.as_ref()))
        .fetch_all(con)
        .await?;
        rows.into_iter().map(BorrowStatusCount::try_from).collect()
    }

    async fn count_by_patron(con: &mut PgConnection) -> Result<Vec<PatronBorrowCount>, DriverError> {
        let rows = sqlx::query_as::<_, PatronBorrowCountRow>(
            // language=postgresql
            r#"
            SELECT
                p.id AS patron_id,
                p.first_name,
                p.last_name,
                COUNT(b.id) AS borrow_count
            FROM
                patrons p
                JOIN borrows b ON b.patron_id = p.id
            GROUP BY
                p.id, p.first_name, p.last_name
            ORDER BY
                borrow_count DESC, p.last_name
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(PatronBorrowCount::from).collect())
    }

    async fn create(con: &mut PgConnection, borrow: &Borrow) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO borrows (id, patron_id, book_id, borrow_date, due_date, return_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(borrow.id().as_ref())
        .bind(borrow.patron_id().as_ref())
        .bind(borrow.book_id().as_ref())
        .bind(borrow.borrow_date().as_ref())
        .bind(borrow.due_date().as_ref().map(|value| value.as_ref()))
        .bind(borrow.return_date().as_ref().map(|value| value.as_ref()))
        .bind(borrow.status().as_str())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, borrow: &Borrow) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE borrows
            SET borrow_date = $2, due_date = $3, return_date = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(borrow.id().as_ref())
        .bind(borrow.borrow_date().as_ref())
        .bind(borrow.due_date().as_ref().map(|value| value.as_ref()))
        .bind(borrow.return_date().as_ref().map(|value| value.as_ref()))
        .bind(borrow.status().as_str())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &BorrowId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM borrows
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BorrowQuery;
    use kernel::interface::update::{
        BookModifier, BorrowModifier, PatronModifier, PublisherModifier,
    };
    use kernel::prelude::entity::{
        Book, BookId, BookTitle, Borrow, BorrowDate, BorrowId, BorrowStatus, FirstName, LastName,
        LibraryCardNumber, Patron, PatronId, PublicationYear, Publisher, PublisherId,
        PublisherName,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresBookRepository, PostgresBorrowRepository, PostgresDatabase,
        PostgresPatronRepository, PostgresPublisherRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let publisher_id = PublisherId::new(Uuid::new_v4());
        let publisher = Publisher::new(
            publisher_id.clone(),
            PublisherName::new("publisher".to_string()),
            None,
            None,
        );
        PostgresPublisherRepository
            .create(&mut con, &publisher)
            .await?;

        let book_id = BookId::new(Uuid::new_v4());
        let book = Book::new(
            book_id.clone(),
            BookTitle::new("title".to_string()),
            publisher_id,
            PublicationYear::new(2024),
            None,
            vec![],
        );
        PostgresBookRepository.create(&mut con, &book).await?;

        let patron_id = PatronId::new(Uuid::new_v4());
        let patron = Patron::new(
            patron_id.clone(),
            LibraryCardNumber::new("123456".to_string()),
            FirstName::new("Jan".to_string()),
            LastName::new("Kowalski".to_string()),
            None,
        );
        PostgresPatronRepository.create(&mut con, &patron).await?;

        let borrow_id = BorrowId::new(Uuid::new_v4());
        let borrow = Borrow::create(
            borrow_id.clone(),
            patron_id.clone(),
            book_id,
            Some(BorrowDate::new(date!(2024 - 01 - 01))),
            None,
            None,
            BorrowStatus::Active,
            date!(2024 - 01 - 01),
        );
        PostgresBorrowRepository.create(&mut con, &borrow).await?;

        let found = PostgresBorrowRepository
            .find_by_id(&mut con, &borrow_id)
            .await?;
        assert_eq!(found, Some(borrow.clone()));

        let by_patron = PostgresBorrowRepository
            .find_by_patron_id(&mut con, &patron_id, Some(&BorrowStatus::Active))
            .await?;
        assert_eq!(by_patron, vec![borrow]);

        PostgresBorrowRepository
            .delete(&mut con, &borrow_id)
            .await?;
        let found = PostgresBorrowRepository
            .find_by_id(&mut con, &borrow_id)
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
