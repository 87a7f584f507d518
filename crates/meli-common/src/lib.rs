//! # meli-common
//!
//! Shared utilities including configuration, telemetry, and password hashing.

pub mod auth;
pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, PasswordError, PasswordService};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, FeedConfig, StoreBackend,
    MAX_FEED_WINDOW_DAYS,
    StoreConfig,
};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
