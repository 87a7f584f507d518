//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, FeedConfig, StoreBackend,
    MAX_FEED_WINDOW_DAYS,
    StoreConfig,
};
