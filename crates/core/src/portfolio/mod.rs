//! Symbol grouping, display metrics, totals and the view model built on them.

pub mod grouping;
pub mod metrics;
pub mod summary;
pub mod view;

pub use grouping::{group_by_symbol, PositionsBySymbol, SymbolBucket, SymbolTotals};
pub use metrics::{calculate_metrics, PositionMetrics, PriceDirection};
pub use summary::PortfolioSummary;
pub use view::{PortfolioView, PositionRow, SymbolView};
