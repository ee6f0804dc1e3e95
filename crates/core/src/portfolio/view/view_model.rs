use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::accounts::Position;
use crate::constants::CURRENCY_SUFFIX;
use crate::portfolio::grouping::{PositionsBySymbol, SymbolBucket, SymbolTotals};
use crate::portfolio::metrics::{self, PriceDirection};
use crate::utils::decimal_utils::round_display;

/// One position's row under its symbol heading.
///
/// Gains are `None` when the position has a zero average entry price.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionRow {
    pub symbol_id: i64,
    pub average_entry_price: Decimal,
    pub gain_percentage: Option<Decimal>,
    pub gain_amount: Option<Decimal>,
    pub total_cost: Decimal,
    pub price_direction: PriceDirection,
}

impl PositionRow {
    pub fn from_position(position: &Position) -> Self {
        let (gain_percentage, gain_amount) = match metrics::calculate_metrics(position) {
            Ok(m) => (Some(m.gain_percentage), Some(m.gain_amount)),
            Err(e) => {
                warn!("{}. Showing position without gain.", e);
                (None, None)
            }
        };
        PositionRow {
            symbol_id: position.symbol_id,
            average_entry_price: round_display(position.average_entry_price),
            gain_percentage,
            gain_amount,
            total_cost: round_display(position.total_cost),
            price_direction: metrics::price_direction(position),
        }
    }
}

/// Heading plus rows for one symbol bucket. The heading shows the first
/// position's price, quantity and direction.
///
/// `totals` is `None` when summing the bucket overflows.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolView {
    pub symbol: String,
    pub current_price: Decimal,
    pub quantity: Decimal,
    pub price_direction: PriceDirection,
    pub totals: Option<SymbolTotals>,
    pub rows: Vec<PositionRow>,
}

impl SymbolView {
    pub fn from_bucket(bucket: &SymbolBucket) -> Option<Self> {
        let first = bucket.first()?;
        let totals = match bucket.totals() {
            Ok(totals) => Some(totals),
            Err(e) => {
                warn!("{}: {}. Showing bucket without totals.", bucket.symbol, e);
                None
            }
        };
        Some(SymbolView {
            symbol: bucket.symbol.clone(),
            current_price: round_display(first.current_price),
            quantity: first.open_quantity,
            price_direction: metrics::price_direction(first),
            totals,
            rows: bucket
                .positions
                .iter()
                .map(PositionRow::from_position)
                .collect(),
        })
    }
}

/// Everything the rendering layer needs, one entry per symbol bucket.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub symbols: Vec<SymbolView>,
}

impl PortfolioView {
    pub fn build(grouped: &PositionsBySymbol) -> Self {
        let symbols = grouped
            .buckets()
            .iter()
            .filter_map(|bucket| {
                let view = SymbolView::from_bucket(bucket);
                if view.is_none() {
                    warn!("Symbol bucket {} has no positions. Skipping.", bucket.symbol);
                }
                view
            })
            .collect();
        PortfolioView { symbols }
    }
}

impl fmt::Display for PositionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {:.2}{}", self.average_entry_price, CURRENCY_SUFFIX)?;
        match (self.gain_percentage, self.gain_amount) {
            (Some(pct), Some(amount)) => write!(
                f,
                "  {:.2}%  {:.2}{}",
                pct, amount, CURRENCY_SUFFIX
            )?,
            _ => write!(f, "  n/a  n/a")?,
        }
        write!(f, "  {:.2}{}", self.total_cost, CURRENCY_SUFFIX)
    }
}

impl fmt::Display for SymbolView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {:.2}{} ({})",
            self.symbol, self.current_price, CURRENCY_SUFFIX, self.price_direction
        )?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Display for PortfolioView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
