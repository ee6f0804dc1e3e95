use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::cmp::Ordering;

use super::metrics_model::{PositionMetrics, PriceDirection};
use crate::accounts::Position;
use crate::errors::CalculatorError;
use crate::utils::decimal_utils::round_display;

pub fn price_direction(position: &Position) -> PriceDirection {
    match position.current_price.cmp(&position.average_entry_price) {
        Ordering::Less => PriceDirection::Down,
        Ordering::Greater => PriceDirection::Up,
        Ordering::Equal => PriceDirection::Neutral,
    }
}

/// `current / entry - 1`, unrounded.
///
/// Fails with `ZeroEntryPrice` when the position has no entry price to
/// compare against.
pub fn gain_ratio(position: &Position) -> Result<Decimal, CalculatorError> {
    if position.average_entry_price.is_zero() {
        return Err(CalculatorError::ZeroEntryPrice {
            symbol: position.symbol.clone(),
        });
    }
    position
        .current_price
        .checked_div(position.average_entry_price)
        .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
        .ok_or_else(|| overflow(position, "price ratio"))
}

pub fn gain_percentage(position: &Position) -> Result<Decimal, CalculatorError> {
    let ratio = gain_ratio(position)?;
    ratio
        .checked_mul(dec!(100))
        .map(round_display)
        .ok_or_else(|| overflow(position, "gain percentage"))
}

pub fn gain_amount(position: &Position) -> Result<Decimal, CalculatorError> {
    let ratio = gain_ratio(position)?;
    ratio
        .checked_mul(position.total_cost)
        .map(round_display)
        .ok_or_else(|| overflow(position, "gain amount"))
}

/// Derives every display metric for a position.
pub fn calculate_metrics(position: &Position) -> Result<PositionMetrics, CalculatorError> {
    Ok(PositionMetrics {
        average_entry_price: round_display(position.average_entry_price),
        gain_percentage: gain_percentage(position)?,
        gain_amount: gain_amount(position)?,
        price_direction: price_direction(position),
    })
}

impl TryFrom<&Position> for PositionMetrics {
    type Error = CalculatorError;

    fn try_from(position: &Position) -> Result<Self, Self::Error> {
        calculate_metrics(position)
    }
}

fn overflow(position: &Position, what: &str) -> CalculatorError {
    CalculatorError::Calculation(format!("{} overflowed for {}", what, position.symbol))
}
