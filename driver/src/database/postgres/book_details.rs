use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookDetailsQuery;
use kernel::interface::update::BookDetailsModifier;
use kernel::prelude::entity::{
    BookDetails, BookId, CoverImageUrl, Isbn, PageCount, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBookDetailsRepository;

#[async_trait::async_trait]
impl BookDetailsQuery<PostgresTransaction> for PostgresBookDetailsRepository {
    async fn find_by_book_id(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Option<BookDetails>, KernelError> {
        PgBookDetailsInternal::find_by_book_id(con.connection(), book_id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<BookDetails>, KernelError> {
        PgBookDetailsInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BookDetailsModifier<PostgresTransaction> for PostgresBookDetailsRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        details: &BookDetails,
    ) -> error_stack::Result<(), KernelError> {
        PgBookDetailsInternal::create(con.connection(), details)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        details: &BookDetails,
    ) -> error_stack::Result<(), KernelError> {
        PgBookDetailsInternal::update(con.connection(), details)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookDetailsInternal::delete(con.connection(), book_id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookDetailsRow {
    book_id: Uuid,
    isbn: String,
    pages: Option<i32>,
    cover_image_url: Option<String>,
}

impl From<BookDetailsRow> for BookDetails {
    fn from(value: BookDetailsRow) -> Self {
        BookDetails::new(
            BookId::new(value.book_id),
            Isbn::new(value.isbn),
            value.pages.map(PageCount::new),
            value.cover_image_url.map(CoverImageUrl::new),
        )
    }
}

pub(in crate::database) struct PgBookDetailsInternal;

impl PgBookDetailsInternal {
    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> Result<Option<BookDetails>, DriverError> {
        let row = sqlx::query_as::<_, BookDetailsRow>(
            // language=postgresql
            r#"
            SELECT
                book_id,
                isbn,
                pages,
                cover_image_url
            FROM
                book_details
            WHERE
                book_id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(BookDetails::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<BookDetails>, DriverError> {
        let rows = sqlx::query_as::<_, BookDetailsRow>(
            // language=postgresql
            r#"
            SELECT
                book_id,
                isbn,
                pages,
                cover_image_url
            FROM
                book_details
            ORDER BY
                isbn
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(BookDetails::from).collect())
    }

    async fn create(con: &mut PgConnection, details: &BookDetails) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO book_details (book_id, isbn, pages, cover_image_url)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(details.book_id().as_ref())
        .bind(details.isbn().as_ref())
        .bind(details.pages().as_ref().map(|value| value.as_ref()))
        .bind(details.cover_image_url().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, details: &BookDetails) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE book_details
            SET isbn = $2, pages = $3, cover_image_url = $4
            WHERE book_id = $1
            "#,
        )
        .bind(details.book_id().as_ref())
        .bind(details.isbn().as_ref())
        .bind(details.pages().as_ref().map(|value| value.as_ref()))
        .bind(details.cover_image_url().as_ref().map(|value| value.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, book_id: &BookId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM book_details
            WHERE book_id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
