use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    AuthorQuery, BookDetailsQuery, BookQuery, CategoryQuery, DependOnAuthorQuery,
    DependOnBookDetailsQuery, DependOnBookQuery, DependOnCategoryQuery, DependOnPublisherQuery,
    PublisherQuery,
};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{
    AuthorId, Book, BookId, BookTitle, CategoryId, PublicationYear, PublisherId, SelectLimit,
};
use kernel::KernelError;

use crate::transfer::{
    AuthorDto, BookDto, BookFullInfoDto, BorrowedBookDto, CreateBookDto, DeleteBookDto,
    GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = if let Some(publisher_id) = dto.publisher_id {
            self.book_query()
                .find_by_publisher_id(&mut connection, &PublisherId::new(publisher_id))
                .await?
        } else if let Some(category_id) = dto.category_id {
            self.book_query()
                .find_by_category_id(&mut connection, &CategoryId::new(category_id))
                .await?
        } else if let Some(author_id) = dto.author_id {
            self.book_query()
                .find_by_author_id(&mut connection, &AuthorId::new(author_id))
                .await?
        } else {
            self.book_query()
                .find_all(&mut connection, &dto.limit, &dto.offset)
                .await?
        };

        Ok(books.into_iter().map(BookDto::from).collect())
    }

    async fn get_most_borrowed_books(
        &self,
        limit: SelectLimit,
    ) -> error_stack::Result<Vec<BorrowedBookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let books = self
            .book_query()
            .find_most_borrowed(&mut connection, &limit)
            .await?;

        Ok(books.into_iter().map(BorrowedBookDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookAuthorsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnAuthorQuery<Connection>
{
    async fn get_book_authors(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<Vec<AuthorDto>>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let Some(book) = self.book_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let mut authors = Vec::with_capacity(book.author_ids().len());
        for author_id in book.author_ids() {
            if let Some(author) = self
                .author_query()
                .find_by_id(&mut connection, author_id)
                .await?
            {
                authors.push(AuthorDto::from(author));
            }
        }

        Ok(Some(authors))
    }
}

impl<Connection: Transaction + Send, T> GetBookAuthorsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnAuthorQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookFullInfoService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnPublisherQuery<Connection>
    + DependOnCategoryQuery<Connection>
    + DependOnAuthorQuery<Connection>
    + DependOnBookDetailsQuery<Connection>
{
    async fn get_book_full_info(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<BookFullInfoDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let Some(book) = self.book_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        let publisher = self
            .publisher_query()
            .find_by_id(&mut connection, book.publisher_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable("book references a missing publisher")
            })?;

        let category = match book.category_id() {
            Some(category_id) => self
                .category_query()
                .find_by_id(&mut connection, category_id)
                .await?,
            None => None,
        };

        let mut authors = Vec::with_capacity(book.author_ids().len());
        for author_id in book.author_ids() {
            if let Some(author) = self
                .author_query()
                .find_by_id(&mut connection, author_id)
                .await?
            {
                authors.push(author.full_name());
            }
        }

        let details = self
            .book_details_query()
            .find_by_book_id(&mut connection, &id)
            .await?;

        Ok(Some(BookFullInfoDto {
            id: book.id().as_ref().to_owned(),
            title: book.title().as_ref().to_owned(),
            publication_year: *book.publication_year().as_ref(),
            publisher: publisher.name().as_ref().to_owned(),
            category: category.map(|category| category.name().as_ref().to_owned()),
            authors,
            isbn: details
                .as_ref()
                .map(|details| details.isbn().as_ref().to_owned()),
            pages: details
                .as_ref()
                .and_then(|details| details.pages().as_ref().map(|pages| *pages.as_ref())),
            cover_image_url: details.as_ref().and_then(|details| {
                details
                    .cover_image_url()
                    .as_ref()
                    .map(|url| url.as_ref().to_owned())
            }),
        }))
    }
}

impl<Connection: Transaction + Send, T> GetBookFullInfoService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnPublisherQuery<Connection>
        + DependOnCategoryQuery<Connection>
        + DependOnAuthorQuery<Connection>
        + DependOnBookDetailsQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4();
        let book = Book::new(
            BookId::new(id),
            BookTitle::new(dto.title),
            PublisherId::new(dto.publisher_id),
            PublicationYear::new(dto.publication_year),
            dto.category_id.map(CategoryId::new),
            dto.author_ids.into_iter().map(AuthorId::new).collect(),
        );
        self.book_modifier().create(&mut connection, &book).await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let Some(mut book) = self.book_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        book.substitute(|book| {
            if let Some(title) = dto.title {
                *book.title = BookTitle::new(title);
            }
            if let Some(publisher_id) = dto.publisher_id {
                *book.publisher_id = PublisherId::new(publisher_id);
            }
            if let Some(publication_year) = dto.publication_year {
                *book.publication_year = PublicationYear::new(publication_year);
            }
            if let Some(category_id) = dto.category_id {
                *book.category_id = Some(CategoryId::new(category_id));
            }
            if let Some(author_ids) = dto.author_ids {
                *book.author_ids = author_ids.into_iter().map(AuthorId::new).collect();
            }
        });
        self.book_modifier().update(&mut connection, &book).await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookModifier<Connection>
{
}
