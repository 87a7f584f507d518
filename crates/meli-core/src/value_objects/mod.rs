//! Value objects - immutable types that represent domain concepts

mod clock;
mod order;
mod price;

pub use clock::{Clock, FixedClock, SystemClock};
pub use order::{PostOrder, UserOrder, DATE_ASC, DATE_DESC, NAME_ASC, NAME_DESC};
pub use price::{final_price, MAX_DISCOUNT, MAX_PRICE};
