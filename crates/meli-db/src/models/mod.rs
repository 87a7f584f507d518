//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod user;

pub use post::PostModel;
pub use user::{AccountModel, UserModel};
