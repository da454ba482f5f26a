use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublisherLocation(String);

impl PublisherLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}
