//! Domain entities - core business objects

mod post;
mod user;

pub use post::{NewPost, Post, Product};
pub use user::{normalize_email, Account, User};
