mod id;
mod location;
mod name;

pub use self::{id::*, location::*, name::*};
use crate::entity::common::EmailAddress;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct Publisher {
    id: PublisherId,
    name: PublisherName,
    email: Option<EmailAddress>,
    location: Option<PublisherLocation>,
}

impl Publisher {
    pub fn new(
        id: PublisherId,
        name: PublisherName,
        email: Option<EmailAddress>,
        location: Option<PublisherLocation>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            location,
        }
    }
}
