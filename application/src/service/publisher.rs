use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnPublisherQuery, PublisherQuery};
use kernel::interface::update::{DependOnPublisherModifier, PublisherModifier};
use kernel::prelude::entity::{
    EmailAddress, Publisher, PublisherId, PublisherLocation, PublisherName,
};
use kernel::KernelError;

use crate::transfer::{
    CreatePublisherDto, DeletePublisherDto, GetAllPublisherDto, GetPublisherDto, PublisherDto,
    UpdatePublisherDto,
};

#[async_trait::async_trait]
pub trait GetPublisherService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPublisherQuery<Connection>
{
    async fn get_publisher(
        &self,
        dto: GetPublisherDto,
    ) -> error_stack::Result<Option<PublisherDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PublisherId::new(dto.id);
        let publisher = self
            .publisher_query()
            .find_by_id(&mut connection, &id)
            .await?;

        Ok(publisher.map(PublisherDto::from))
    }

    async fn get_all_publishers(
        &self,
        dto: GetAllPublisherDto,
    ) -> error_stack::Result<Vec<PublisherDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let publishers = self
            .publisher_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetPublisherService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPublisherQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreatePublisherService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPublisherModifier<Connection>
{
    async fn create_publisher(
        &self,
        dto: CreatePublisherDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = Uuid::new_v4();
        let publisher = Publisher::new(
            PublisherId::new(id),
            PublisherName::new(dto.name),
            dto.email.map(EmailAddress::new),
            dto.location.map(PublisherLocation::new),
        );
        self.publisher_modifier()
            .create(&mut connection, &publisher)
            .await?;

        connection.commit().await?;
        Ok(id)
    }
}

impl<Connection: Transaction + Send, T> CreatePublisherService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPublisherModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdatePublisherService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPublisherQuery<Connection>
    + DependOnPublisherModifier<Connection>
{
    async fn update_publisher(
        &self,
        dto: UpdatePublisherDto,
    ) -> error_stack::Result<Option<()>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PublisherId::new(dto.id);
        let Some(mut publisher) = self
            .publisher_query()
            .find_by_id(&mut connection, &id)
            .await?
        else {
            return Ok(None);
        };

        publisher.substitute(|publisher| {
            if let Some(name) = dto.name {
                *publisher.name = PublisherName::new(name);
            }
            if let Some(email) = dto.email {
                *publisher.email = Some(EmailAddress::new(email));
            }
            if let Some(location) = dto.location {
                *publisher.location = Some(PublisherLocation::new(location));
            }
        });
        self.publisher_modifier()
            .update(&mut connection, &publisher)
            .await?;

        connection.commit().await?;
        Ok(Some(()))
    }
}

impl<Connection: Transaction + Send, T> UpdatePublisherService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnPublisherQuery<Connection>
        + DependOnPublisherModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeletePublisherService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnPublisherModifier<Connection>
{
    async fn delete_publisher(
        &self,
        dto: DeletePublisherDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = PublisherId::new(dto.id);
        self.publisher_modifier()
            .delete(&mut connection, &id)
            .await?;

        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeletePublisherService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnPublisherModifier<Connection>
{
}
