//! Money module - base-unit/display conversions and percentage formatting.

mod money_errors;
mod money_formatter;

pub use money_errors::MoneyError;
pub use money_formatter::{format_basis_points, parse_amount, to_base_units, to_display_units};
