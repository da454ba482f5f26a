use kernel::prelude::entity::{Author, DestructAuthor, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AuthorDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub nationality: String,
    pub full_name: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let full_name = value.full_name();
        let DestructAuthor {
            id,
            first_name,
            last_name,
            email,
            nationality,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.map(Into::into),
            nationality: nationality.into(),
            full_name,
        }
    }
}

pub struct GetAuthorDto {
    pub id: Uuid,
}

pub struct GetAllAuthorDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
    pub search: Option<String>,
}

pub struct CreateAuthorDto {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub nationality: String,
}

pub struct UpdateAuthorDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
}

pub struct DeleteAuthorDto {
    pub id: Uuid,
}
