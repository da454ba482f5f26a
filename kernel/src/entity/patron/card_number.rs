use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LibraryCardNumber(String);

impl LibraryCardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
