mod card_number;
mod id;

pub use self::{card_number::*, id::*};
use crate::entity::common::{EmailAddress, FirstName, LastName};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Patron {
    id: PatronId,
    card_number: LibraryCardNumber,
    first_name: FirstName,
    last_name: LastName,
    email: Option<EmailAddress>,
}

impl Patron {
    pub fn new(
        id: PatronId,
        card_number: LibraryCardNumber,
        first_name: FirstName,
        last_name: LastName,
        email: Option<EmailAddress>,
    ) -> Self {
        Self {
            id,
            card_number,
            first_name,
            last_name,
            email,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_ref(), self.last_name.as_ref())
    }
}
