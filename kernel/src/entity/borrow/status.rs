use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorrowStatus {
    #[default]
    Active,
    Overdue,
    Returned,
    Lost,
}

impl BorrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Active => "active",
            BorrowStatus::Overdue => "overdue",
            BorrowStatus::Returned => "returned",
            BorrowStatus::Lost => "lost",
        }
    }

    /// A borrow is closed once the book came back or is written off.
    pub fn is_closed(&self) -> bool {
        matches!(self, BorrowStatus::Returned | BorrowStatus::Lost)
    }
}

impl Display for BorrowStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BorrowStatus {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "overdue" => Ok(Self::Overdue),
            "returned" => Ok(Self::Returned),
            "lost" => Ok(Self::Lost),
            _ => Err(KernelError::Validation),
        }
    }
}
