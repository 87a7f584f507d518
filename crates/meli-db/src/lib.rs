//! # meli-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL backend for every repository trait
//! defined in `meli-core`. It handles:
//!
//! - Connection pool management and the embedded schema migration
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations on a single [`PgStore`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meli_common::DatabaseConfig;
//! use meli_core::AccountRepository;
//! use meli_db::{connect, PgStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = connect(&DatabaseConfig::new("postgres://localhost/socialmeli")).await?;
//!     let store = PgStore::new(pool);
//!     let users = store.list_users(Default::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect, create_pool, run_migrations, PgPool};
pub use repositories::PgStore;
