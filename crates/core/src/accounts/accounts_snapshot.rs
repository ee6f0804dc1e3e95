use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::accounts_model::AccountPositions;
use crate::errors::{Result, ValidationError};

/// Totals reported by the backend alongside the accounts payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpstreamSummary {
    pub result_market_value: Decimal,
    pub result_total_cost: Decimal,
}

/// One fetched accounts payload: `{ "accounts": {...}, "summary": {...} }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AccountsSnapshot {
    pub accounts: AccountPositions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<UpstreamSummary>,
}

impl AccountsSnapshot {
    pub fn from_json_str(payload: &str) -> Result<Self> {
        Self::validated(serde_json::from_str(payload)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::validated(serde_json::from_reader(reader)?)
    }

    /// Reads a snapshot file. A missing or unreadable file is `Error::Io`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn validated(snapshot: AccountsSnapshot) -> Result<Self> {
        snapshot.validate()?;
        debug!(
            "Parsed snapshot with {} accounts and {} positions",
            snapshot.accounts.len(),
            snapshot.accounts.positions().count()
        );
        Ok(snapshot)
    }

    /// Every position must carry a non-empty symbol to be grouped.
    pub fn validate(&self) -> Result<()> {
        for (account_id, positions) in self.accounts.iter() {
            if let Some(position) = positions.iter().find(|p| p.symbol.trim().is_empty()) {
                return Err(ValidationError::MissingField(format!(
                    "symbol (account {}, symbolId {})",
                    account_id, position.symbol_id
                ))
                .into());
            }
        }
        Ok(())
    }
}
