//! Store contract tests
//!
//! The in-memory backend always runs. PostgreSQL runs when `DATABASE_URL` is
//! set and is skipped otherwise.
//!
//! Run with: cargo test -p integration-tests --test store_contract

use integration_tests::{contract, init_test_tracing, TestBackend};

#[tokio::test]
async fn test_memory_store_contract() {
    init_test_tracing();
    let backend = TestBackend::memory();
    contract::run_all(&backend).await.unwrap();
}

#[tokio::test]
async fn test_postgres_store_contract() {
    init_test_tracing();
    let Some(backend) = TestBackend::postgres().await.unwrap() else {
        return;
    };
    contract::run_all(&backend).await.unwrap();
}
