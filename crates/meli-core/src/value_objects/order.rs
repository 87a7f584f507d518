//! Sort orders for user and post listings

use std::cmp::Ordering;

use crate::entities::{Post, User};
use crate::error::DomainError;

pub const NAME_ASC: &str = "name_asc";
pub const NAME_DESC: &str = "name_desc";
pub const DATE_ASC: &str = "date_asc";
pub const DATE_DESC: &str = "date_desc";

/// Ordering for user listings.
///
/// An empty order string means "leave the listing as it is".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserOrder {
    #[default]
    Unspecified,
    NameAsc,
    NameDesc,
}

impl UserOrder {
    /// Parse an order parameter, case-insensitively
    pub fn parse(order: &str) -> Result<Self, DomainError> {
        if order.is_empty() {
            return Ok(Self::Unspecified);
        }
        match order.to_lowercase().as_str() {
            NAME_ASC => Ok(Self::NameAsc),
            NAME_DESC => Ok(Self::NameDesc),
            _ => Err(DomainError::InvalidSortOrder),
        }
    }

    /// Sort users by name, ignoring case. `Unspecified` is a no-op.
    pub fn sort(self, users: &mut [User]) {
        match self {
            Self::Unspecified => {}
            Self::NameAsc => users.sort_by(compare_names),
            Self::NameDesc => users.sort_by(|a, b| compare_names(b, a)),
        }
    }
}

fn compare_names(a: &User, b: &User) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Ordering for post listings. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostOrder {
    DateAsc,
    #[default]
    DateDesc,
}

impl PostOrder {
    /// Parse an order parameter, case-insensitively. Empty means `DateDesc`.
    pub fn parse(order: &str) -> Result<Self, DomainError> {
        if order.is_empty() {
            return Ok(Self::DateDesc);
        }
        match order.to_lowercase().as_str() {
            DATE_ASC => Ok(Self::DateAsc),
            DATE_DESC => Ok(Self::DateDesc),
            _ => Err(DomainError::InvalidSortOrder),
        }
    }

    /// Sort posts by date
    pub fn sort(self, posts: &mut [Post]) {
        match self {
            Self::DateAsc => posts.sort_by(|a, b| a.date.cmp(&b.date)),
            Self::DateDesc => posts.sort_by(|a, b| b.date.cmp(&a.date)),
        }
    }
}
