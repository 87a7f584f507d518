//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `PostInsert`: Borrowed column values for inserting a post

mod post;
mod user;

pub use post::PostInsert;
