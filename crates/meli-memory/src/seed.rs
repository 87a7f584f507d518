//! Default catalog users

use meli_core::User;

use crate::MemoryStore;

/// The catalog users a fresh deployment starts with
pub fn default_users() -> Vec<User> {
    vec![
        User::new(123, "usuario123", false),
        User::new(234, "vendedor1", true),
        User::new(6932, "vendedor2", true),
        User::new(4698, "usuario1", false),
    ]
}

/// Seed `store` with [`default_users`]
pub fn seed_default(store: &MemoryStore) {
    store.seed_users(default_users());
}
