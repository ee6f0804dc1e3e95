use std::path::Path;

use anyhow::Context;
use folioview_core::constants::CURRENCY_SUFFIX;
use folioview_core::{group_by_symbol, AccountsSnapshot, Error, PortfolioSummary, PortfolioView};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Group,
    Summary,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<AccountsSnapshot> {
    let snapshot = AccountsSnapshot::from_path(path)
        .with_context(|| format!("Cannot load snapshot {}", path.display()))?;
    tracing::info!(
        "Loaded {} accounts from {}",
        snapshot.accounts.len(),
        path.display()
    );
    Ok(snapshot)
}

pub fn render(
    report: Report,
    snapshot: &AccountsSnapshot,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match report {
        Report::Group => {
            let view = PortfolioView::build(&group_by_symbol(&snapshot.accounts));
            match format {
                OutputFormat::Text => Ok(view.to_string()),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
            }
        }
        Report::Summary => {
            let summary = PortfolioSummary::from_accounts(&snapshot.accounts).map_err(Error::from)?;
            if let Some(upstream) = &snapshot.summary {
                if !summary.matches_upstream(upstream) {
                    tracing::warn!(
                        "Backend summary ({} / {}) differs from recomputed totals ({} / {})",
                        upstream.result_market_value,
                        upstream.result_total_cost,
                        summary.total_market_value,
                        summary.total_cost
                    );
                }
            }
            match format {
                OutputFormat::Text => summary_text(&summary),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
            }
        }
    }
}

fn summary_text(summary: &PortfolioSummary) -> anyhow::Result<String> {
    let gain = summary.unrealized_gain().map_err(Error::from)?;
    Ok(format!(
        "Accounts: {}\nPositions: {}\nSymbols: {}\nMarket value: {:.2}{s}\nTotal cost: {:.2}{s}\nUnrealized gain: {:.2}{s}\n",
        summary.account_count,
        summary.position_count,
        summary.symbol_count,
        summary.total_market_value,
        summary.total_cost,
        gain,
        s = CURRENCY_SUFFIX,
    ))
}
