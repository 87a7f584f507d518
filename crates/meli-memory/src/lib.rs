//! # meli-memory
//!
//! In-memory implementation of the repository traits defined in `meli-core`.
//!
//! All state lives behind one `parking_lot::RwLock` per store instance:
//! lookups take the read side, every mutation takes the write side, and each
//! trait method is a single critical section.

mod seed;
mod store;

pub use seed::{default_users, seed_default};
pub use store::MemoryStore;
