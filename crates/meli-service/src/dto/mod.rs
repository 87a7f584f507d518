//! Data transfer objects for service inputs and outputs
//!
//! This module provides:
//! - Request DTOs deserialized from adapter payloads
//! - Response DTOs serialized back to callers
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateUserRequest, LoginRequest, ProductRequest, PublishPostRequest, RegisterRequest,
};

pub use responses::{
    AccountResponse, FollowedListResponse, FollowedPostsResponse, FollowersCountResponse,
    FollowersListResponse, PostResponse, ProductResponse, ProfileResponse, PromoCountResponse,
    PromoListResponse, UserResponse,
};
