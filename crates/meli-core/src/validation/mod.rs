//! Validation primitives
//!
//! Stateless checks shared by the services. Each returns the typed
//! [`DomainError`] kind for the first rule the input breaks.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::DomainError;
use crate::value_objects::{PostOrder, UserOrder, MAX_DISCOUNT, MAX_PRICE};

pub const PRODUCT_NAME_MAX: usize = 40;
pub const PRODUCT_TYPE_MAX: usize = 15;
pub const BRAND_MAX: usize = 25;
pub const COLOR_MAX: usize = 15;
pub const NOTES_MAX: usize = 80;
pub const USER_NAME_MAX: usize = 40;
pub const PASSWORD_MIN: usize = 6;

/// Date format of post payloads, e.g. `29-04-2021`
pub const POST_DATE_FORMAT: &str = "%d-%m-%Y";

/// Zero is "empty", negatives are rejected separately.
pub fn validate_id(id: i64) -> Result<(), DomainError> {
    if id == 0 {
        return Err(DomainError::EmptyId);
    }
    if id < 0 {
        return Err(DomainError::NonPositiveId);
    }
    Ok(())
}

/// Letters of any script, ASCII digits and plain spaces
fn is_allowed_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == ' '
}

/// Required text bounded by `max` code points
pub fn validate_required_text(s: &str, max: usize) -> Result<(), DomainError> {
    if s.is_empty() {
        return Err(DomainError::FieldEmpty);
    }
    check_text(s, max)
}

/// Optional notes; empty is always valid
pub fn validate_optional_notes(s: &str) -> Result<(), DomainError> {
    if s.is_empty() {
        return Ok(());
    }
    check_text(s, NOTES_MAX)
}

fn check_text(s: &str, max: usize) -> Result<(), DomainError> {
    if s.chars().count() > max {
        return Err(DomainError::TextTooLong { max });
    }
    if !s.chars().all(is_allowed_char) {
        return Err(DomainError::SpecialCharacters);
    }
    Ok(())
}

/// Non-positive prices count as empty; exactly 10.000.000 is accepted
pub fn validate_price(price: Decimal) -> Result<(), DomainError> {
    if price <= Decimal::ZERO {
        return Err(DomainError::PriceEmpty);
    }
    if price > MAX_PRICE {
        return Err(DomainError::PriceTooLarge);
    }
    Ok(())
}

pub fn validate_category(category: i32) -> Result<(), DomainError> {
    if category == 0 {
        return Err(DomainError::CategoryEmpty);
    }
    Ok(())
}

/// Returns the discount to store: the input when promoted, zero otherwise.
pub fn validate_discount(has_promo: bool, discount: Decimal) -> Result<Decimal, DomainError> {
    if !has_promo {
        return Ok(Decimal::ZERO);
    }
    if discount <= Decimal::ZERO || discount > MAX_DISCOUNT {
        return Err(DomainError::DiscountOutOfRange);
    }
    Ok(discount)
}

/// Parse a `dd-mm-yyyy` post date
pub fn parse_post_date(s: &str) -> Result<NaiveDate, DomainError> {
    if s.is_empty() {
        return Err(DomainError::DateEmpty);
    }
    if !has_post_date_shape(s) {
        return Err(DomainError::DateFormat);
    }
    NaiveDate::parse_from_str(s, POST_DATE_FORMAT).map_err(|_| DomainError::DateFormat)
}

/// Exactly two-digit day and month, four-digit year, `-` separators
fn has_post_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn validate_user_order(order: &str) -> Result<UserOrder, DomainError> {
    UserOrder::parse(order)
}

pub fn validate_post_order(order: &str) -> Result<PostOrder, DomainError> {
    PostOrder::parse(order)
}
