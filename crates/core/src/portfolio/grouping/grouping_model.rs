use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::accounts::Position;
use crate::errors::CalculatorError;
use crate::utils::decimal_utils::checked_total;

/// Positions sharing one ticker symbol, across every account that holds it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolBucket {
    pub symbol: String,
    pub positions: Vec<Position>,
}

/// Quantity, market value and cost summed over a symbol bucket.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymbolTotals {
    pub quantity: Decimal,
    pub market_value: Decimal,
    pub total_cost: Decimal,
}

impl SymbolBucket {
    /// The position whose price and quantity head the bucket in the view.
    pub fn first(&self) -> Option<&Position> {
        self.positions.first()
    }

    /// Fails when any running total leaves the `Decimal` range.
    pub fn totals(&self) -> Result<SymbolTotals, CalculatorError> {
        self.positions
            .iter()
            .try_fold(SymbolTotals::default(), |acc, position| {
                Ok(SymbolTotals {
                    quantity: checked_total(acc.quantity, position.open_quantity, "quantity")?,
                    market_value: checked_total(
                        acc.market_value,
                        position.current_market_value,
                        "market value",
                    )?,
                    total_cost: checked_total(acc.total_cost, position.total_cost, "total cost")?,
                })
            })
    }
}

/// Ordered mapping of ticker symbol to its bucket.
///
/// Buckets keep the order in which their symbol was first encountered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionsBySymbol {
    buckets: Vec<SymbolBucket>,
    index: HashMap<String, usize>,
}

impl PositionsBySymbol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position to the bucket for its symbol, creating it if needed.
    pub fn push(&mut self, position: Position) {
        match self.index.get(&position.symbol) {
            Some(&slot) => self.buckets[slot].positions.push(position),
            None => {
                self.index
                    .insert(position.symbol.clone(), self.buckets.len());
                self.buckets.push(SymbolBucket {
                    symbol: position.symbol.clone(),
                    positions: vec![position],
                });
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&[Position]> {
        self.index
            .get(symbol)
            .map(|&slot| self.buckets[slot].positions.as_slice())
    }

    pub fn buckets(&self) -> &[SymbolBucket] {
        &self.buckets
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.symbol.as_str())
    }

    /// Every grouped position, bucket by bucket.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.buckets.iter().flat_map(|b| b.positions.iter())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'a> IntoIterator for &'a PositionsBySymbol {
    type Item = &'a SymbolBucket;
    type IntoIter = std::slice::Iter<'a, SymbolBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl Serialize for PositionsBySymbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for bucket in &self.buckets {
            map.serialize_entry(&bucket.symbol, &bucket.positions)?;
        }
        map.end()
    }
}
