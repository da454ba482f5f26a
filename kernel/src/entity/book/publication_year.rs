use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublicationYear(i32);

impl PublicationYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
