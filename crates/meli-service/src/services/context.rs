//! Service context - dependency container for services
//!
//! Holds the store, the clock and the password service shared by every
//! service.

use std::sync::Arc;

use chrono::{NaiveDate, TimeDelta};
use meli_common::{AppConfig, PasswordService, StoreBackend, MAX_FEED_WINDOW_DAYS};
use meli_core::{Clock, Store, SystemClock};
use meli_db::PgStore;
use meli_memory::{default_users, MemoryStore};
use tracing::info;

use super::error::{ServiceError, ServiceResult};

/// Default look-back window of the followed-sellers feed
pub const DEFAULT_FEED_WINDOW_DAYS: i64 = 14;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
    password_service: PasswordService,
    feed_window_days: i64,
}

impl ServiceContext {
    /// Create a context over `store` with the system clock and default feed window
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            password_service: PasswordService::new(),
            feed_window_days: DEFAULT_FEED_WINDOW_DAYS,
        }
    }

    /// Build the backend selected by `config`.
    ///
    /// For PostgreSQL this connects and applies the schema. Default users are
    /// seeded into either backend when enabled.
    pub async fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let store: Arc<dyn Store> = match config.store.backend {
            StoreBackend::Memory => {
                let store = MemoryStore::new();
                if config.store.seed_default_users {
                    store.seed_users(default_users());
                }
                Arc::new(store)
            }
            StoreBackend::Postgres => {
                let db = config
                    .database
                    .as_ref()
                    .ok_or_else(|| ServiceError::internal("DATABASE_URL is required"))?;
                let pool = meli_db::connect(db)
                    .await
                    .map_err(|e| ServiceError::internal(e.to_string()))?;
                let store = PgStore::new(pool);
                if config.store.seed_default_users {
                    store.seed_users(&default_users()).await?;
                }
                Arc::new(store)
            }
        };

        info!(backend = ?config.store.backend, "Store ready");

        ServiceContextBuilder::new()
            .store(store)
            .feed_window_days(config.feed.window_days)
            .build()
    }

    // === Store ===

    /// Get the store
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    // === Time ===

    /// Today's date according to the injected clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// First day included in the followed-sellers feed
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the window reaches before the
    /// earliest representable date
    pub fn feed_since(&self) -> ServiceResult<NaiveDate> {
        TimeDelta::try_days(self.feed_window_days)
            .and_then(|window| self.today().checked_sub_signed(window))
            .ok_or_else(|| ServiceError::internal("feed window reaches before the earliest date"))
    }

    // === Services ===

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"dyn Store")
            .field("today", &self.today())
            .field("feed_window_days", &self.feed_window_days)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn Store>>,
    clock: Option<Arc<dyn Clock>>,
    feed_window_days: Option<i64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn feed_window_days(mut self, days: i64) -> Self {
        self.feed_window_days = Some(days);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if no store was given or the feed
    /// window is negative or longer than `MAX_FEED_WINDOW_DAYS`
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let store = self
            .store
            .ok_or_else(|| ServiceError::internal("store is required"))?;

        let feed_window_days = self.feed_window_days.unwrap_or(DEFAULT_FEED_WINDOW_DAYS);
        if !(0..=MAX_FEED_WINDOW_DAYS).contains(&feed_window_days) {
            return Err(ServiceError::internal(format!(
                "feed window must be between 0 and {MAX_FEED_WINDOW_DAYS} days"
            )));
        }

        let mut ctx = ServiceContext::new(store);
        if let Some(clock) = self.clock {
            ctx.clock = clock;
        }
        ctx.feed_window_days = feed_window_days;
        Ok(ctx)
    }
}
