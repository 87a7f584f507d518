//! Test helpers for integration tests
//!
//! Builds fresh backends and service contexts for each scenario.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use meli_common::{try_init_tracing, DatabaseConfig};
use meli_core::{FixedClock, Store, User};
use meli_db::PgStore;
use meli_memory::MemoryStore;
use meli_service::{ServiceContext, ServiceContextBuilder};
use parking_lot::Mutex;

/// A store under test, empty until seeded
pub enum TestBackend {
    /// Swapped for a new store on reset
    Memory(Mutex<Arc<MemoryStore>>),
    Postgres(PgStore),
}

impl TestBackend {
    /// A fresh in-memory backend
    pub fn memory() -> Self {
        Self::Memory(Mutex::new(Arc::new(MemoryStore::new())))
    }

    /// Connect to `DATABASE_URL` and wipe every table.
    ///
    /// Returns `None` when the variable is not set.
    pub async fn postgres() -> Result<Option<Self>> {
        dotenvy::dotenv().ok();
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("Skipping PostgreSQL run: DATABASE_URL not set");
            return Ok(None);
        };

        let pool = meli_db::connect(&DatabaseConfig::new(url)).await?;
        let backend = Self::Postgres(PgStore::new(pool));
        backend.reset().await?;
        Ok(Some(backend))
    }

    /// Remove all data so the next scenario starts empty
    pub async fn reset(&self) -> Result<()> {
        match self {
            Self::Memory(store) => *store.lock() = Arc::new(MemoryStore::new()),
            Self::Postgres(store) => {
                sqlx::query("TRUNCATE posts, follows, users RESTART IDENTITY")
                    .execute(store.pool())
                    .await?;
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Insert users with fixed IDs
    pub async fn seed(&self, users: &[User]) -> Result<()> {
        match self {
            Self::Memory(store) => store.lock().seed_users(users.to_vec()),
            Self::Postgres(store) => store.seed_users(users).await?,
        }
        Ok(())
    }

    pub fn store(&self) -> Arc<dyn Store> {
        match self {
            Self::Memory(store) => Arc::clone(&store.lock()) as Arc<dyn Store>,
            Self::Postgres(store) => Arc::new(store.clone()),
        }
    }

    /// Service context over this backend with the clock pinned to `today`
    pub fn context(&self, today: NaiveDate) -> Result<ServiceContext> {
        Ok(ServiceContextBuilder::new()
            .store(self.store())
            .clock(Arc::new(FixedClock(today)))
            .build()?)
    }
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing();
}

/// Every backend available in this environment, memory first.
///
/// The PostgreSQL backend is shared, so suites run scenarios sequentially
/// and call [`TestBackend::reset`] between them.
pub async fn available_backends() -> Result<Vec<TestBackend>> {
    let mut backends = vec![TestBackend::memory()];
    if let Some(pg) = TestBackend::postgres().await? {
        backends.push(pg);
    }
    Ok(backends)
}
