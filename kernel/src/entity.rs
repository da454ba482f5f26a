mod author;
mod book;
mod book_details;
mod borrow;
mod category;
mod common;
mod patron;
mod publisher;

pub use self::{
    author::*, book::*, book_details::*, borrow::*, category::*, common::*, patron::*,
    publisher::*,
};
