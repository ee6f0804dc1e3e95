/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Currency suffix appended to monetary values in the text view
pub const CURRENCY_SUFFIX: &str = "$";

/// Snapshot file read when no path is configured
pub const DEFAULT_SNAPSHOT_PATH: &str = "./data/accounts.json";
