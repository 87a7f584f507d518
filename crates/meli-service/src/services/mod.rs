//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! validation and orchestration of store operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod product;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use product::ProductService;
pub use user::UserService;
