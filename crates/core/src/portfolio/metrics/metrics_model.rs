use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current price sits relative to the average entry price.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Down,
    Up,
    Neutral,
}

impl PriceDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceDirection::Down => "down",
            PriceDirection::Up => "up",
            PriceDirection::Neutral => "neutral",
        }
    }
}

impl fmt::Display for PriceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metrics derived from one position. Computed on demand, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionMetrics {
    /// Average entry price rounded to display precision
    pub average_entry_price: Decimal,
    /// Percent change of current price over entry price, rounded
    pub gain_percentage: Decimal,
    /// Gain scaled onto the position's total cost, rounded
    pub gain_amount: Decimal,
    pub price_direction: PriceDirection,
}
