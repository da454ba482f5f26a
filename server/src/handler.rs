use driver::database::{
    PostgresAuthorRepository, PostgresBookDetailsRepository, PostgresBookRepository,
    PostgresBorrowRepository, PostgresCategoryRepository, PostgresDatabase,
    PostgresPatronRepository, PostgresPublisherRepository, PostgresTransaction,
};
use kernel::interface::clock::{DependOnClock, SystemClock};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    DependOnAuthorQuery, DependOnBookDetailsQuery, DependOnBookQuery, DependOnBorrowQuery,
    DependOnCategoryQuery, DependOnPatronQuery, DependOnPublisherQuery,
};
use kernel::interface::update::{
    DependOnAuthorModifier, DependOnBookDetailsModifier, DependOnBookModifier,
    DependOnBorrowModifier, DependOnCategoryModifier, DependOnPatronModifier,
    DependOnPublisherModifier,
};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    clock: SystemClock,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self {
            pgpool,
            clock: SystemClock,
        })
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for Handler {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        self.pgpool.transact().await
    }
}

impl DependOnClock for Handler {
    type Clock = SystemClock;
    fn clock(&self) -> &Self::Clock {
        &self.clock
    }
}

impl DependOnPublisherQuery<PostgresTransaction> for Handler {
    type PublisherQuery = PostgresPublisherRepository;
    fn publisher_query(&self) -> &Self::PublisherQuery {
        &PostgresPublisherRepository
    }
}

impl DependOnPublisherModifier<PostgresTransaction> for Handler {
    type PublisherModifier = PostgresPublisherRepository;
    fn publisher_modifier(&self) -> &Self::PublisherModifier {
        &PostgresPublisherRepository
    }
}

impl DependOnCategoryQuery<PostgresTransaction> for Handler {
    type CategoryQuery = PostgresCategoryRepository;
    fn category_query(&self) -> &Self::CategoryQuery {
        &PostgresCategoryRepository
    }
}

impl DependOnCategoryModifier<PostgresTransaction> for Handler {
    type CategoryModifier = PostgresCategoryRepository;
    fn category_modifier(&self) -> &Self::CategoryModifier {
        &PostgresCategoryRepository
    }
}

impl DependOnAuthorQuery<PostgresTransaction> for Handler {
    type AuthorQuery = PostgresAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &PostgresAuthorRepository
    }
}

impl DependOnAuthorModifier<PostgresTransaction> for Handler {
    type AuthorModifier = PostgresAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &PostgresAuthorRepository
    }
}

impl DependOnBookQuery<PostgresTransaction> for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier<PostgresTransaction> for Handler {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnBookDetailsQuery<PostgresTransaction> for Handler {
    type BookDetailsQuery = PostgresBookDetailsRepository;
    fn book_details_query(&self) -> &Self::BookDetailsQuery {
        &PostgresBookDetailsRepository
    }
}

impl DependOnBookDetailsModifier<PostgresTransaction> for Handler {
    type BookDetailsModifier = PostgresBookDetailsRepository;
    fn book_details_modifier(&self) -> &Self::BookDetailsModifier {
        &PostgresBookDetailsRepository
    }
}

impl DependOnPatronQuery<PostgresTransaction> for Handler {
    type PatronQuery = PostgresPatronRepository;
    fn patron_query(&self) -> &Self::PatronQuery {
        &PostgresPatronRepository
    }
}

impl DependOnPatronModifier<PostgresTransaction> for Handler {
    type PatronModifier = PostgresPatronRepository;
    fn patron_modifier(&self) -> &Self::PatronModifier {
        &PostgresPatronRepository
    }
}

impl DependOnBorrowQuery<PostgresTransaction> for Handler {
    type BorrowQuery = PostgresBorrowRepository;
    fn borrow_query(&self) -> &Self::BorrowQuery {
        &PostgresBorrowRepository
    }
}

impl DependOnBorrowModifier<PostgresTransaction> for Handler {
    type BorrowModifier = PostgresBorrowRepository;
    fn borrow_modifier(&self) -> &Self::BorrowModifier {
        &PostgresBorrowRepository
    }
}
