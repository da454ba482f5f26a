use kernel::prelude::entity::{DestructPublisher, Publisher, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PublisherDto {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl From<Publisher> for PublisherDto {
    fn from(value: Publisher) -> Self {
        let DestructPublisher {
            id,
            name,
            email,
            location,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.map(Into::into),
            location: location.map(Into::into),
        }
    }
}

pub struct GetPublisherDto {
    pub id: Uuid,
}

pub struct GetAllPublisherDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreatePublisherDto {
    pub name: String,
    pub email: Option<String>,
    pub location: Option<String>,
}

pub struct UpdatePublisherDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

pub struct DeletePublisherDto {
    pub id: Uuid,
}
