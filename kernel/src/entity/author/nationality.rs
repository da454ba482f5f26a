use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Nationality(String);

impl Nationality {
    pub fn new(nationality: impl Into<String>) -> Self {
        Self(nationality.into())
    }
}
