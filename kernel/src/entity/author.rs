mod id;
mod nationality;

pub use self::{id::*, nationality::*};
use crate::entity::common::{EmailAddress, FirstName, LastName};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Author {
    id: AuthorId,
    first_name: FirstName,
    last_name: LastName,
    email: Option<EmailAddress>,
    nationality: Nationality,
}

impl Author {
    pub fn new(
        id: AuthorId,
        first_name: FirstName,
        last_name: LastName,
        email: Option<EmailAddress>,
        nationality: Nationality,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            nationality,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_ref(), self.last_name.as_ref())
    }
}
