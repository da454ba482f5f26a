use uuid::Uuid;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BorrowQuery, DependOnBorrowQuery, DependOnPatronQuery, PatronQuery,
};
use kernel::interface::update::{DependOnPatronModifier, PatronModifier};
use kernel::prelude::entity::{
    EmailAddress, FirstName, LastName, LibraryCardNumber, Patron, PatronId,
};
use kernel::KernelError;

use crate::transfer::{
    BorrowDto, CreatePatronDto, DeletePatronDto, GetAllPatronDto, GetPatronBorrowsDto,
    GetPatronDto, PatronDto, UpdatePatronDto,
};

#[async_trait::async_trait]
pub trait GetPatronService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnPatronQuery<Connection>
{
    async fn get_patron(
        &self,
        dto: GetPatronDto,
    ) -> error_stack::Result<Option<PatronDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PatronId::new(dto.id);
        let patron = self.patron_query().find_by_id(&mut connection, &id).await?;

        Ok(patron.map(PatronDto::from))
    }

    async fn get_all_patrons(
        &self,
        dto: GetAllPatronDto,
    ) -> error_stack::Result<Vec<PatronDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let patrons = self
            .patron_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(patrons.into_iter().map(PatronDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetPatronService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPatronQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetPatronBorrowsService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPatronQuery<Connection>
    + DependOnBorrowQuery<Connection>
    + DependOnClock
{
    async fn get_patron_borrows(
        &self,
        dto: GetPatronBorrowsDto,
    ) -> error_stack::Result<Option<Vec<BorrowDto>>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let patron_id = PatronId::new(dto.patron_id);
        if self
            .patron_query()
            .find_by_id(&mut connection, &patron_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let borrows = self
            .borrow_query()
            .find_by_patron_id(&mut connection, &patron_id, dto.status.as_ref())
            .await?;

        let today = self.clock().today();
        Ok(Some(
            borrows
                .into_iter()
                .map(|borrow| BorrowDto::from_borrow(borrow, today))
                .collect(),
        ))
    }
}

impl<Connection: Transaction + Send, T> GetPatronBorrowsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnPatronQuery<Connection>
        + DependOnBorrowQuery<Connection>
        + DependOnClock
{
}

#[async_trait::async_trait]
pub trait CreatePatronService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPatronModifier<Connection>
{
    async fn create_patron(&self, dto: CreatePatronDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4();
        let patron = Patron::new(
            PatronId::new(id),
            LibraryCardNumber::new(dto.card_number),
            FirstName::new(dto.first_name),
            LastName::new(dto.last_name),
            dto.email.map(EmailAddress::new),
        );
        self.patron_modifier()
            .create(&mut connection, &patron)
            .await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreatePatronService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPatronModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdatePatronService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPatronQuery<Connection>
    + DependOnPatronModifier<Connection>
{
    async fn update_patron(
        &self,
        dto: UpdatePatronDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PatronId::new(dto.id);
        let Some(mut patron) = self.patron_query().find_by_id(&mut connection, &id).await? else {
            return Ok(None);
        };

        patron.substitute(|patron| {
            if let Some(card_number) = dto.card_number {
                *patron.card_number = LibraryCardNumber::new(card_number);
            }
            if let Some(first_name) = dto.first_name {
                *patron.first_name = FirstName::new(first_name);
            }
            if let Some(last_name) = dto.last_name {
                *patron.last_name = LastName::new(last_name);
            }
            if let Some(email) = dto.email {
                *patron.email = Some(EmailAddress::new(email));
            }
        });
        self.patron_modifier()
            .update(&mut connection, &patron)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdatePatronService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnPatronQuery<Connection>
        + DependOnPatronModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeletePatronService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPatronModifier<Connection>
{
    async fn delete_patron(&self, dto: DeletePatronDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PatronId::new(dto.id);
        self.patron_modifier().delete(&mut connection, &id).await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeletePatronService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPatronModifier<Connection>
{
}
