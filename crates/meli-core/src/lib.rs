//! # meli-core
//!
//! Domain layer containing entities, value objects, validation rules and
//! repository traits for the follow graph and post feed.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{normalize_email, Account, NewPost, Post, Product, User};
pub use error::DomainError;
pub use traits::{AccountRepository, FollowRepository, PostRepository, RepoResult, Store};
pub use value_objects::{
    final_price, Clock, FixedClock, PostOrder, SystemClock, UserOrder, MAX_PRICE,
};
