use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single holding of one symbol within one brokerage account.
///
/// Field names follow the brokerage positions payload (camelCase). Profit and
/// loss fields may be null upstream and default to `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub symbol_id: i64,
    pub open_quantity: Decimal,
    #[serde(default)]
    pub closed_quantity: Decimal,
    pub current_market_value: Decimal,
    pub current_price: Decimal,
    pub average_entry_price: Decimal,
    #[serde(default)]
    pub closed_pnl: Option<Decimal>,
    #[serde(default)]
    pub open_pnl: Option<Decimal>,
    #[serde(default)]
    pub day_pnl: Option<Decimal>,
    pub total_cost: Decimal,
    #[serde(default)]
    pub is_real_time: bool,
    #[serde(default)]
    pub is_under_reorg: bool,
}

/// Ordered mapping of account id to the positions held in that account.
///
/// Iteration order is insertion order, which for deserialized snapshots is
/// the document order of the `accounts` object. Re-inserting an existing
/// account replaces its positions in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountPositions {
    accounts: Vec<(String, Vec<Position>)>,
}

impl AccountPositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, account_id: impl Into<String>, positions: Vec<Position>) {
        let account_id = account_id.into();
        match self.accounts.iter_mut().find(|(id, _)| *id == account_id) {
            Some((_, existing)) => *existing = positions,
            None => self.accounts.push((account_id, positions)),
        }
    }

    pub fn get(&self, account_id: &str) -> Option<&[Position]> {
        self.accounts
            .iter()
            .find(|(id, _)| id == account_id)
            .map(|(_, positions)| positions.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Position])> {
        self.accounts
            .iter()
            .map(|(id, positions)| (id.as_str(), positions.as_slice()))
    }

    pub fn account_ids(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|(id, _)| id.as_str())
    }

    /// All positions across every account, in account then position order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.accounts
            .iter()
            .flat_map(|(_, positions)| positions.iter())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Position>)> for AccountPositions {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Position>)>>(iter: I) -> Self {
        let mut accounts = AccountPositions::new();
        for (account_id, positions) in iter {
            accounts.insert(account_id, positions);
        }
        accounts
    }
}

impl Serialize for AccountPositions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.accounts.len()))?;
        for (account_id, positions) in &self.accounts {
            map.serialize_entry(account_id, positions)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AccountPositions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AccountPositionsVisitor)
    }
}

struct AccountPositionsVisitor;

impl<'de> Visitor<'de> for AccountPositionsVisitor {
    type Value = AccountPositions;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of account id to a list of positions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut accounts = AccountPositions::new();
        while let Some((account_id, positions)) =
            access.next_entry::<String, Option<Vec<Position>>>()?
        {
            // A null list is an account with nothing to show.
            accounts.insert(account_id, positions.unwrap_or_default());
        }
        // Same order the web client iterates the payload in: integer-like
        // ids ascending first, then every other id in document order.
        accounts
            .accounts
            .sort_by_key(|(account_id, _)| {
                let index = array_index(account_id);
                (index.is_none(), index)
            });
        Ok(accounts)
    }
}

/// Canonical array index form: no sign, no leading zeros, below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|n| *n != u32::MAX && n.to_string() == key)
}
