use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{Author, AuthorId, EmailAddress, FirstName, LastName, Nationality};
use kernel::KernelError;

use crate::transfer::{
    AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};

#[async_trait::async_trait]
pub trait GetAuthorService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnAuthorQuery<Connection>
{
    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;

        Ok(author.map(AuthorDto::from))
    }

    async fn get_all_authors(
        &self,
        dto: GetAllAuthorDto,
    ) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let authors = match &dto.search {
            Some(term) => {
                self.author_query()
                    .search_by_name(&mut connection, term)
                    .await?
            }
            None => {
                self.author_query()
                    .find_all(&mut connection, &dto.limit, &dto.offset)
                    .await?
            }
        };

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAuthorQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateAuthorService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAuthorModifier<Connection>
{
    async fn create_author(&self, dto: CreateAuthorDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4();
        let author = Author::new(
            AuthorId::new(id),
            FirstName::new(dto.first_name),
            LastName::new(dto.last_name),
            dto.email.map(EmailAddress::new),
            Nationality::new(dto.nationality),
        );
        self.author_modifier()
            .create(&mut connection, &author)
            .await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreateAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAuthorModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateAuthorService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAuthorQuery<Connection>
    + DependOnAuthorModifier<Connection>
{
    async fn update_author(
        &self,
        dto: UpdateAuthorDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let Some(mut author) = self.author_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        author.substitute(|author| {
            if let Some(first_name) = dto.first_name {
                *author.first_name = FirstName::new(first_name);
            }
            if let Some(last_name) = dto.last_name {
                *author.last_name = LastName::new(last_name);
            }
            if let Some(email) = dto.email {
                *author.email = Some(EmailAddress::new(email));
            }
            if let Some(nationality) = dto.nationality {
                *author.nationality = Nationality::new(nationality);
            }
        });
        self.author_modifier()
            .update(&mut connection, &author)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdateAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnAuthorQuery<Connection>
        + DependOnAuthorModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteAuthorService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAuthorModifier<Connection>
{
    async fn delete_author(&self, dto: DeleteAuthorDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        self.author_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteAuthorService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAuthorModifier<Connection>
{
}
