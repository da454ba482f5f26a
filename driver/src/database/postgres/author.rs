use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{
    Author, AuthorId, EmailAddress, FirstName, LastName, Nationality, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery<PostgresTransaction> for PostgresAuthorRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }

    async fn search_by_name(
        &self,
        con: &mut PostgresTransaction,
        term: &str,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::search_by_name(con.connection(), term)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl AuthorModifier<PostgresTransaction> for PostgresAuthorRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::create(con.connection(), author)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        author: &Author,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::update(con.connection(), author)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<(), KernelError> {
        PgAuthorInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: Option<String>,
    nationality: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(
            AuthorId::new(value.id),
            FirstName::new(value.first_name),
            LastName::new(value.last_name),
            value.email.map(EmailAddress::new),
            Nationality::new(value.nationality),
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_by_id(con: &mut PgConnection, id: &AuthorId) -> Result<Option<Author>, DriverError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                nationality
            FROM
                authors
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Author::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<Author>, DriverError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                nationality
            FROM
                authors
            ORDER BY
                last_name, first_name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn search_by_name(
        con: &mut PgConnection,
        term: &str,
    ) -> Result<Vec<Author>, DriverError> {
        let pattern = format!("%{term}%");
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                first_name,
                last_name,
                email,
                nationality
            FROM
                authors
            WHERE
                first_name ILIKE $1 OR last_name ILIKE $1
            ORDER BY
                last_name, first_name
            "#,
        )
        .bind(pattern)
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn create(con: &mut PgConnection, author: &Author) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO authors (id, first_name, last_name, email, nationality)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.email().as_ref().map(|value| value.as_ref()))
        .bind(author.nationality().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, author: &Author) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE authors
            SET first_name = $2, last_name = $3, email = $4, nationality = $5
            WHERE id = $1
            "#,
        )
        .bind(author.id().as_ref())
        .bind(author.first_name().as_ref())
        .bind(author.last_name().as_ref())
        .bind(author.email().as_ref().map(|value| value.as_ref()))
        .bind(author.nationality().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &AuthorId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
