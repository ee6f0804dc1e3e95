#[cfg(test)]
mod tests {
    use crate::accounts::{AccountPositions, Position, UpstreamSummary};
    use crate::errors::CalculatorError;
    use crate::portfolio::summary::PortfolioSummary;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn position(symbol: &str, market_value: Decimal, total_cost: Decimal) -> Position {
        Position {
            symbol: symbol.to_string(),
            symbol_id: 7,
            open_quantity: dec!(1),
            closed_quantity: Decimal::ZERO,
            current_market_value: market_value,
            current_price: market_value,
            average_entry_price: total_cost,
            closed_pnl: None,
            open_pnl: None,
            day_pnl: None,
            total_cost,
            is_real_time: false,
            is_under_reorg: false,
        }
    }

    fn accounts() -> AccountPositions {
        vec![
            (
                "acc1",
                vec![
                    position("AAPL", dec!(1100), dec!(1000)),
                    position("GOOG", dec!(250.50), dec!(300)),
                ],
            ),
            ("acc2", vec![position("AAPL", dec!(55), dec!(50))]),
            ("acc3", vec![]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_summary_totals() {
        let summary = PortfolioSummary::from_accounts(&accounts()).unwrap();

        assert_eq!(summary.total_market_value, dec!(1405.50));
        assert_eq!(summary.total_cost, dec!(1350));
        assert_eq!(summary.account_count, 3);
        assert_eq!(summary.position_count, 3);
        assert_eq!(summary.symbol_count, 2);
        assert_eq!(summary.unrealized_gain(), Ok(dec!(55.50)));
    }

    #[test]
    fn test_empty_summary() {
        let summary = PortfolioSummary::from_accounts(&AccountPositions::new()).unwrap();
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_matches_upstream() {
        let summary = PortfolioSummary::from_accounts(&accounts()).unwrap();

        let agreeing = UpstreamSummary {
            result_market_value: dec!(1405.5),
            result_total_cost: dec!(1350),
        };
        assert!(summary.matches_upstream(&agreeing));

        let stale = UpstreamSummary {
            result_market_value: dec!(1400),
            result_total_cost: dec!(1350),
        };
        assert!(!summary.matches_upstream(&stale));
    }

    #[test]
    fn test_market_value_overflow_is_an_error() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let accounts: AccountPositions = vec![
            ("acc1", vec![position("BIG", huge, dec!(1))]),
            ("acc2", vec![position("BIG", huge, dec!(1))]),
        ]
        .into_iter()
        .collect();

        let result = PortfolioSummary::from_accounts(&accounts);
        assert_eq!(
            result,
            Err(CalculatorError::Calculation(
                "portfolio market value overflowed".to_string()
            ))
        );
    }

    #[test]
    fn test_unrealized_gain_overflow_is_an_error() {
        let summary = PortfolioSummary {
            total_market_value: Decimal::MIN,
            total_cost: dec!(1),
            ..Default::default()
        };
        assert!(matches!(
            summary.unrealized_gain(),
            Err(CalculatorError::Calculation(_))
        ));
    }
}
