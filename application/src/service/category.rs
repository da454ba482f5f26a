use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CategoryQuery, DependOnCategoryQuery};
use kernel::interface::update::{CategoryModifier, DependOnCategoryModifier};
use kernel::prelude::entity::{Category, CategoryId, CategoryName};
use kernel::KernelError;

use crate::transfer::{
    CategoryBookCountDto, CategoryDto, CreateCategoryDto, DeleteCategoryDto, GetAllCategoryDto,
    GetCategoryDto, UpdateCategoryDto,
};

#[async_trait::async_trait]
pub trait GetCategoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryQuery<Connection>
{
    async fn get_category(
        &self,
        dto: GetCategoryDto,
    ) -> error_stack::Result<Option<CategoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CategoryId::new(dto.id);
        let category = self
            .category_query()
            .find_by_id(&mut connection, &id)
            .await?;

        Ok(category.map(CategoryDto::from))
    }

    async fn get_all_categories(
        &self,
        dto: GetAllCategoryDto,
    ) -> error_stack::Result<Vec<CategoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let categories = self
            .category_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    async fn get_category_stats(
        &self,
    ) -> error_stack::Result<Vec<CategoryBookCountDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let counts = self.category_query().count_books(&mut connection).await?;

        Ok(counts.into_iter().map(CategoryBookCountDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCategoryQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateCategoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryModifier<Connection>
{
    async fn create_category(
        &self,
        dto: CreateCategoryDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4();
        let category = Category::new(CategoryId::new(id), CategoryName::new(dto.name));
        self.category_modifier()
            .create(&mut connection, &category)
            .await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreateCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCategoryModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateCategoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryQuery<Connection>
    + DependOnCategoryModifier<Connection>
{
    async fn update_category(
        &self,
        dto: UpdateCategoryDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CategoryId::new(dto.id);
        let Some(mut category) = self
            .category_query()
            .find_by_id(&mut connection, &id)
            .await?
        else {
            return Ok(None);
        };

        category.substitute(|category| {
            if let Some(name) = dto.name {
                *category.name = CategoryName::new(name);
            }
        });
        self.category_modifier()
            .update(&mut connection, &category)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdateCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCategoryQuery<Connection>
        + DependOnCategoryModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteCategoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCategoryModifier<Connection>
{
    async fn delete_category(&self, dto: DeleteCategoryDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = CategoryId::new(dto.id);
        self.category_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteCategoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCategoryModifier<Connection>
{
}
