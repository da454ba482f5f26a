use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PageCount(i32);

impl PageCount {
    pub fn new(pages: impl Into<i32>) -> Self {
        Self(pages.into())
    }
}
