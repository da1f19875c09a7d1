pub mod direction;
pub mod form;

pub use direction::*;
pub use form::{parse_price, Edit, FormField, TradeForm};
