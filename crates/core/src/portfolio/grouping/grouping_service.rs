use log::debug;

use super::grouping_model::PositionsBySymbol;
use crate::accounts::AccountPositions;

/// Buckets every position of every account by ticker symbol.
///
/// Accounts are visited in input order and positions in list order, so a
/// bucket lists positions in the order they were encountered. Nothing is
/// dropped or duplicated; accounts without positions contribute nothing.
pub fn group_by_symbol(accounts: &AccountPositions) -> PositionsBySymbol {
    let mut grouped = PositionsBySymbol::new();
    for (_, positions) in accounts.iter() {
        for position in positions {
            grouped.push(position.clone());
        }
    }
    debug!(
        "Grouped positions from {} accounts into {} symbols",
        accounts.len(),
        grouped.len()
    );
    grouped
}

impl From<&AccountPositions> for PositionsBySymbol {
    fn from(accounts: &AccountPositions) -> Self {
        group_by_symbol(accounts)
    }
}
