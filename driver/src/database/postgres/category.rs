use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{CategoryBookCount, CategoryQuery};
use kernel::interface::update::CategoryModifier;
use kernel::prelude::entity::{Category, CategoryId, CategoryName, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresCategoryRepository;

#[async_trait::async_trait]
impl CategoryQuery<PostgresTransaction> for PostgresCategoryRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CategoryId,
    ) -> error_stack::Result<Option<Category>, KernelError> {
        PgCategoryInternal::find_by_id(con.connection(), id)
            .await
            .convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Category>, KernelError> {
        PgCategoryInternal::find_all(con.connection(), limit, offset)
            .await
            .convert_error()
    }

    async fn count_books(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<CategoryBookCount>, KernelError> {
        PgCategoryInternal::count_books(con.connection())
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl CategoryModifier<PostgresTransaction> for PostgresCategoryRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::create(con.connection(), category)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::update(con.connection(), category)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &CategoryId,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::delete(con.connection(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
}

impl From<CategoryRow> for Category {
    fn from(value: CategoryRow) -> Self {
        Category::new(CategoryId::new(value.id), CategoryName::new(value.name))
    }
}

#[derive(sqlx::FromRow)]
struct CategoryBookCountRow {
    id: Uuid,
    name: String,
    book_count: i64,
}

impl From<CategoryBookCountRow> for CategoryBookCount {
    fn from(value: CategoryBookCountRow) -> Self {
        CategoryBookCount::new(
            CategoryId::new(value.id),
            CategoryName::new(value.name),
            value.book_count,
        )
    }
}

pub(in crate::database) struct PgCategoryInternal;

impl PgCategoryInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CategoryId,
    ) -> Result<Option<Category>, DriverError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name
            FROM
                categories
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> Result<Vec<Category>, DriverError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name
            FROM
                categories
            ORDER BY
                name
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn count_books(con: &mut PgConnection) -> Result<Vec<CategoryBookCount>, DriverError> {
        let rows = sqlx::query_as::<_, CategoryBookCountRow>(
            // language=postgresql
            r#"
            SELECT
                c.id,
                c.name,
                COUNT(b.id) AS book_count
            FROM
                categories c
                LEFT JOIN books b ON b.category_id = c.id
            GROUP BY
                c.id, c.name
            ORDER BY
                c.name
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(CategoryBookCount::from).collect())
    }

    async fn create(con: &mut PgConnection, category: &Category) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO categories (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(category.id().as_ref())
        .bind(category.name().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, category: &Category) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE categories
            SET name = $2
            WHERE id = $1
            "#,
        )
        .bind(category.id().as_ref())
        .bind(category.name().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &CategoryId) -> Result<(), DriverError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}
