use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::CalculatorError;

/// Rounds to display precision, halves away from zero.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `lhs + rhs`, or a calculation error naming the running total that overflowed.
pub fn checked_total(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal, CalculatorError> {
    lhs.checked_add(rhs)
        .ok_or_else(|| CalculatorError::Calculation(format!("{} overflowed", what)))
}
