use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::PatronQuery;
use kernel::interface::update::PatronModifier;
use kernel::prelude::entity::{
    EmailAddress, FirstName, LastName, LibraryCardNumber, Patron, PatronId, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresPatronRepository;

#[async_trait::async_trait]
impl PatronQuery<PostgresTransaction> for PostgresPatronRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &PatronId,
    ) -> error_stack::Result<Option<Patron>, KernelError> {
        PgPatronInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Patron>, KernelError> {
        PgPatronInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl PatronModifier<PostgresTransaction> for PostgresPatronRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        patron: &Patron,
    ) -> error_stack::Result<(), KernelError> {
        PgPatronInternal::create(con.connection(), patron)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        patron: &Patron,
    ) -> error_stack::Result<(), KernelError> {
        PgPatronInternal::update(con.connection(), patron)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &PatronId,
    ) -> error_stack::Result<(), KernelError> {
        PgPatronInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct PatronRow {
    id: Uuid,
    card_number: String,
    first_name: String,
    last_name: String,
    email: Option<String>,
}

impl From<PatronRow> for Patron {
    fn from(value: PatronRow) -> Self {
        Patron::new(
            PatronId::new(value.id),
            LibraryCardNumber::new(value.card_number),
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            value.email.map(EmailAddress::new),
        )
    }
}

pub(in crate::database) struct PgPatronInternal;

impl PgPatronInternal {
    async fn find_by_id(con: &mut PgConnection, id: &PatronId) -> Result<Option<Patron>, DriverError> {
        let row = sqlx::query_as::<_, PatronRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                card_number,
                first_name,
                last_name,
                email
            FROM
                patrons
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Patron::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<Patron>, DriverError> {
        let rows = sqlx::query_as::<_, PatronRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                card_number,
                first_name,
                last_name,
                email
            FROM
                patrons
            ORDER BY
                card_number
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Patron::from).collect())
    }

    async fn create(con: &mut PgConnection, patron: &Patron) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO patrons (id, card_number, first_name, last_name, email)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(patron.id().as_ref())
        .bind(patron.card_number().as_ref())
        .bind(patron.first_name().as_ref())
        .bind(patron.last_name().as_ref())
        .bind(patron.email().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, patron: &Patron) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE patrons
            SET card_number = $2, first_name = $3, last_name = $4, email = $5
            WHERE id = $1
            "#,
        )
        .bind(patron.id().as_ref())
        .bind(patron.card_number().as_ref())
        .bind(patron.first_name().as_ref())
        .bind(patron.last_name().as_ref())
        .bind(patron.email().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &PatronId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM patrons
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
