use kernel::prelude::entity::{BorrowStatus, DestructPatron, Patron, SelectLimit, SelectOffset};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PatronDto {
    pub id: Uuid,
    pub card_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub full_name: String,
}

impl From<Patron> for PatronDto {
    fn from(value: Patron) -> Self {
        let full_name = value.full_name();
        let DestructPatron {
            id,
            card_number,
            first_name,
            last_name,
            email,
        } = value.into_destruct();
        Self {
            id: id.into(),
            card_number: card_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.map(Into::into),
            full_name,
        }
    }
}

pub struct GetPatronDto {
    pub id: Uuid,
}

pub struct GetAllPatronDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct GetPatronBorrowsDto {
    pub patron_id: Uuid,
    pub status: Option<BorrowStatus>,
}

pub struct CreatePatronDto {
    pub card_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

pub struct UpdatePatronDto {
    pub id: Uuid,
    pub card_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

pub struct DeletePatronDto {
    pub id: Uuid,
}
