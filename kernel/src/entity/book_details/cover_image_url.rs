use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct CoverImageUrl(String);

impl CoverImageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}
