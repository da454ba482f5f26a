use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::PublisherQuery;
use kernel::interface::update::PublisherModifier;
use kernel::prelude::entity::{
    EmailAddress, Publisher, PublisherId, PublisherLocation, PublisherName, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresPublisherRepository;

#[async_trait::async_trait]
impl PublisherQuery<PostgresTransaction> for PostgresPublisherRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &PublisherId,
    ) -> error_stack::Result<Option<Publisher>, KernelError> {
        PgPublisherInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Publisher>, KernelError> {
        PgPublisherInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl PublisherModifier<PostgresTransaction> for PostgresPublisherRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        publisher: &Publisher,
    ) -> error_stack::Result<(), KernelError> {
        PgPublisherInternal::create(con.connection(), publisher)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        publisher: &Publisher,
    ) -> error_stack::Result<(), KernelError> {
        PgPublisherInternal::update(con.connection(), publisher)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &PublisherId,
    ) -> error_stack::Result<(), KernelError> {
        PgPublisherInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct PublisherRow {
    id: Uuid,
    name: String,
    email: Option<String>,
    location: Option<String>,
}

impl From<PublisherRow> for Publisher {
    fn from(value: PublisherRow) -> Self {
        Publisher::new(
            PublisherId::new(value.id),
            PublisherName::new(value.name),
            value.email.map(EmailAddress::new),
            value.location.map(PublisherLocation::new),
        )
    }
}

pub(in crate::database) struct PgPublisherInternal;

impl PgPublisherInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &PublisherId,
    ) -> Result<Option<Publisher>, DriverError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name,
                email,
                location
            FROM
                publishers
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Publisher::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<Publisher>, DriverError> {
        let rows = sqlx::query_as::<_, PublisherRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name,
                email,
                location
            FROM
                publishers
            ORDER BY
                name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Publisher::from).collect())
    }

    async fn create(con: &mut PgConnection, publisher: &Publisher) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO publishers (id, name, email, location)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(publisher.id().as_ref())
        .bind(publisher.name().as_ref())
        .bind(publisher.email().as_ref().map(|value| value.as_ref()))
        .bind(publisher.location().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, publisher: &Publisher) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE publishers
            SET name = $2, email = $3, location = $4
            WHERE id = $1
            "#,
        )
        .bind(publisher.id().as_ref())
        .bind(publisher.name().as_ref())
        .bind(publisher.email().as_ref().map(|value| value.as_ref()))
        .bind(publisher.location().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &PublisherId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM publishers
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
