use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookDetailsQuery, DependOnBookDetailsQuery};
use kernel::interface::update::{BookDetailsModifier, DependOnBookDetailsModifier};
use kernel::prelude::entity::{BookDetails, BookId, CoverImageUrl, Isbn, PageCount};
use kernel::KernelError;

use crate::transfer::{
    BookDetailsDto, CreateBookDetailsDto, DeleteBookDetailsDto, GetAllBookDetailsDto,
    GetBookDetailsDto, UpdateBookDetailsDto,
};

#[async_trait::async_trait]
pub trait GetBookDetailsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookDetailsQuery<Connection>
{
    async fn get_book_details(
        &self,
        dto: GetBookDetailsDto,
    ) -> error_stack::Result<Option<BookDetailsDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book_id = BookId::new(dto.book_id);
        let details = self
            .book_details_query()
            .find_by_book_id(&mut connection, &book_id)
            .await?;

        Ok(details.map(BookDetailsDto::from))
    }

    async fn get_all_book_details(
        &self,
        dto: GetAllBookDetailsDto,
    ) -> error_stack::Result<Vec<BookDetailsDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let details = self
            .book_details_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(details.into_iter().map(BookDetailsDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetBookDetailsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookDetailsQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookDetailsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookDetailsModifier<Connection>
{
    async fn create_book_details(
        &self,
        dto: CreateBookDetailsDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book_id = dto.book_id;
        let details = BookDetails::new(
            BookId::new(book_id),
            Isbn::new(dto.isbn),
            dto.pages.map(PageCount::new),
            dto.cover_image_url.map(CoverImageUrl::new),
        );
        self.book_details_modifier()
            .create(&mut connection, &details)
            .await?;

        connection.commit().await?;
        Ok(book_id)
    }
}

impl<Connection: Transaction + Send, T> CreateBookDetailsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookDetailsModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookDetailsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookDetailsQuery<Connection>
    + DependOnBookDetailsModifier<Connection>
{
    async fn update_book_details(
        &self,
        dto: UpdateBookDetailsDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book_id = BookId::new(dto.book_id);
        let Some(mut details) = self
            .book_details_query()
            .find_by_book_id(&mut connection, &book_id)
            .await?
        else {
            return Ok(None);
        };

        details.substitute(|details| {
            if let Some(isbn) = dto.isbn {
                *details.isbn = Isbn::new(isbn);
            }
            if let Some(pages) = dto.pages {
                *details.pages = Some(PageCount::new(pages));
            }
            if let Some(cover_image_url) = dto.cover_image_url {
                *details.cover_image_url = Some(CoverImageUrl::new(cover_image_url));
            }
        });
        self.book_details_modifier()
            .update(&mut connection, &details)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdateBookDetailsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookDetailsQuery<Connection>
        + DependOnBookDetailsModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookDetailsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookDetailsModifier<Connection>
{
    async fn delete_book_details(
        &self,
        dto: DeleteBookDetailsDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book_id = BookId::new(dto.book_id);
        self.book_details_modifier()
            .delete(&mut connection, &book_id)
            .await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteBookDetailsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookDetailsModifier<Connection>
{
}
