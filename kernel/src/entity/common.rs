mod email;
mod name;
mod page;

pub use self::{email::*, name::*, page::*};
