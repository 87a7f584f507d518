//! Domain traits

mod repositories;

pub use repositories::{AccountRepository, FollowRepository, PostRepository, RepoResult, Store};
