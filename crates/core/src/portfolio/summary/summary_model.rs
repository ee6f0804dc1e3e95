use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::accounts::{AccountPositions, UpstreamSummary};
use crate::errors::CalculatorError;
use crate::utils::decimal_utils::checked_total;

/// Totals over every position of every account in a snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_market_value: Decimal,
    pub total_cost: Decimal,
    pub account_count: usize,
    pub position_count: usize,
    pub symbol_count: usize,
}

impl PortfolioSummary {
    /// Fails when a total leaves the `Decimal` range.
    pub fn from_accounts(accounts: &AccountPositions) -> Result<Self, CalculatorError> {
        let mut symbols = HashSet::new();
        let mut summary = PortfolioSummary {
            account_count: accounts.len(),
            ..Default::default()
        };
        for position in accounts.positions() {
            summary.total_market_value = checked_total(
                summary.total_market_value,
                position.current_market_value,
                "portfolio market value",
            )?;
            summary.total_cost =
                checked_total(summary.total_cost, position.total_cost, "portfolio total cost")?;
            summary.position_count += 1;
            symbols.insert(position.symbol.as_str());
        }
        summary.symbol_count = symbols.len();
        Ok(summary)
    }

    /// Market value minus cost.
    pub fn unrealized_gain(&self) -> Result<Decimal, CalculatorError> {
        self.total_market_value
            .checked_sub(self.total_cost)
            .ok_or_else(|| CalculatorError::Calculation("unrealized gain overflowed".to_string()))
    }

    /// Whether the backend-reported totals agree with the recomputed ones.
    pub fn matches_upstream(&self, upstream: &UpstreamSummary) -> bool {
        self.total_market_value == upstream.result_market_value
            && self.total_cost == upstream.result_total_cost
    }
}
