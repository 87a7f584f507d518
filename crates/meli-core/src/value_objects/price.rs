//! Promotion pricing

use rust_decimal::{Decimal, RoundingStrategy};

/// Highest accepted price for a single product
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Highest accepted discount percentage
pub const MAX_DISCOUNT: Decimal = Decimal::ONE_HUNDRED;

/// Price after applying a percentage discount.
///
/// Without a promotion the price is returned untouched. With one the result is
/// `price * (1 - discount / 100)` rounded to two places, midpoints away from zero.
pub fn final_price(price: Decimal, discount: Decimal, has_promo: bool) -> Decimal {
    if !has_promo {
        return price;
    }
    let factor = Decimal::ONE - discount / Decimal::ONE_HUNDRED;
    (price * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
