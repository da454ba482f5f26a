use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{BookQuery, BorrowedBook};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, Book, BookId, BookTitle, CategoryId, PublicationYear, PublisherId, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PostgresTransaction> for PostgresBookRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }

    async fn find_by_publisher_id(
        &self,
        con: &mut PostgresTransaction,
        publisher_id: &PublisherId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_publisher_id(con.connection(), publisher_id)
            .await
            .convert_error()
    }

    async fn find_by_category_id(
        &self,
        con: &mut PostgresTransaction,
        category_id: &CategoryId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_category_id(con.connection(), category_id)
            .await
            .convert_error()
    }

    async fn find_by_author_id(
        &self,
        con: &mut PostgresTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_author_id(con.connection(), author_id)
            .await
            .convert_error()
    }

    async fn find_most_borrowed(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
    ) -> error_stack::Result<Vec<BorrowedBook>, KernelError> {
        PgBookInternal::find_most_borrowed(con.connection(), limit)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BookModifier<PostgresTransaction> for PostgresBookRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con.connection(), book)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con.connection(), book)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    publisher_id: Uuid,
    publication_year: i32,
    category_id: Option<Uuid>,
    author_ids: Vec<Uuid>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            PublisherId::new(value.publisher_id),
            PublicationYear::new(value.publication_year),
            value.category_id.map(CategoryId::new),
            value.author_ids.into_iter().map(AuthorId::new).collect(),
        )
    }
}

#[derive(sqlx::FromRow)]
struct BorrowedBookRow {
    id: Uuid,
    title: String,
    publisher_id: Uuid,
    publication_year: i32,
    category_id: Option<Uuid>,
    author_ids: Vec<Uuid>,
    borrow_count: i64,
}

impl From<BorrowedBookRow> for BorrowedBook {
    fn from(value: BorrowedBookRow) -> Self {
        let book = Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            PublisherId::new(value.publisher_id),
            PublicationYear::new(value.publication_year),
            value.category_id.map(CategoryId::new),
            value.author_ids.into_iter().map(AuthorId::new).collect(),
        );
        BorrowedBook::new(book, value.borrow_count)
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(con: &mut PgConnection, id: &BookId) -> Result<Option<Book>, DriverError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
            WHERE
                b.id = $1
            GROUP BY
                b.id
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
            GROUP BY
                b.id
            ORDER BY
                b.title
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_publisher_id(
        con: &mut PgConnection,
        publisher_id: &PublisherId,
    ) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
            WHERE
                b.publisher_id = $1
            GROUP BY
                b.id
            ORDER BY
                b.title
            "#,
        )
        .bind(publisher_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_category_id(
        con: &mut PgConnection,
        category_id: &CategoryId,
    ) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
            WHERE
                b.category_id = $1
            GROUP BY
                b.id
            ORDER BY
                b.title
            "#,
        )
        .bind(category_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_author_id(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> Result<Vec<Book>, DriverError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
            WHERE
                b.id IN (SELECT book_id FROM book_authors WHERE author_id = $1)
            GROUP BY
                b.id
            ORDER BY
                b.title
            "#,
        )
        .bind(author_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_most_borrowed(
        con: &mut PgConnection,
        limit: &SelectLimit,
    ) -> Result<Vec<BorrowedBook>, DriverError> {
        let rows = sqlx::query_as::<_, BorrowedBookRow>(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.title,
                b.publisher_id,
                b.publication_year,
                b.category_id,
                COALESCE(ARRAY_AGG(DISTINCT ba.author_id) FILTER (WHERE ba.author_id IS NOT NULL), '{}') AS author_ids,
                COUNT(DISTINCT br.id) AS borrow_count
            FROM
                books b
                LEFT JOIN book_authors ba ON ba.book_id = b.id
                LEFT JOIN borrows br ON br.book_id = b.id
            GROUP BY
                b.id
            ORDER BY
                borrow_count DESC, b.title
            LIMIT $1
            "#,
        )
        .bind(limit.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(BorrowedBook::from).collect())
    }

    async fn create(con: &mut PgConnection, book: &Book) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO books (id, title, publisher_id, publication_year, category_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.publisher_id().as_ref())
        .bind(book.publication_year().as_ref())
        .bind(book.category_id().as_ref().map(|value| value.as_ref()))
        .execute(&mut *con)
        .await?;
        Self::link_authors(con, book).await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, book: &Book) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, publisher_id = $3, publication_year = $4, category_id = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.publisher_id().as_ref())
        .bind(book.publication_year().as_ref())
        .bind(book.category_id().as_ref().map(|value| value.as_ref()))
        .execute(&mut *con)
        .await?;
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM book_authors
            WHERE book_id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .execute(&mut *con)
        .await?;
        Self::link_authors(con, book).await?;
        Ok(())
    }

    async fn link_authors(con: &mut PgConnection, book: &Book) -> Result<(), DriverError> {
        for author_id in book.author_ids() {
            sqlx::query(
                // language=postgresql
                r#"
                INSERT INTO book_authors (book_id, author_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(book.id().as_ref())
            .bind(author_id.as_ref())
            .execute(&mut *con)
            .await?;
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &BookId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
