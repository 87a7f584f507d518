//! Credential utilities

mod password;

pub use password::{hash_password, verify_password, PasswordError, PasswordService};
