#[cfg(test)]
mod tests {
    use crate::accounts::{AccountPositions, Position};
    use crate::portfolio::grouping::{group_by_symbol, SymbolBucket};
    use crate::portfolio::metrics::PriceDirection;
    use crate::portfolio::view::{PortfolioView, PositionRow, SymbolView};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn position(
        symbol: &str,
        symbol_id: i64,
        entry: Decimal,
        current: Decimal,
        total_cost: Decimal,
    ) -> Position {
        Position {
            symbol: symbol.to_string(),
            symbol_id,
            open_quantity: dec!(10),
            closed_quantity: Decimal::ZERO,
            current_market_value: current * dec!(10),
            current_price: current,
            average_entry_price: entry,
            closed_pnl: None,
            open_pnl: None,
            day_pnl: None,
            total_cost,
            is_real_time: false,
            is_under_reorg: false,
        }
    }

    fn sample_view() -> PortfolioView {
        let accounts: AccountPositions = vec![
            (
                "acc1",
                vec![position("AAPL", 8049, dec!(100), dec!(110), dec!(1000))],
            ),
            (
                "acc2",
                vec![
                    position("AAPL", 8049, dec!(120), dec!(110), dec!(1200)),
                    position("FREE", 1, Decimal::ZERO, dec!(3), Decimal::ZERO),
                ],
            ),
        ]
        .into_iter()
        .collect();
        PortfolioView::build(&group_by_symbol(&accounts))
    }

    #[test]
    fn test_view_has_one_entry_per_bucket() {
        let view = sample_view();
        let symbols: Vec<&str> = view.symbols.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "FREE"]);
    }

    #[test]
    fn test_heading_uses_first_position() {
        let view = sample_view();
        let aapl = &view.symbols[0];

        assert_eq!(aapl.current_price, dec!(110.00));
        assert_eq!(aapl.quantity, dec!(10));
        assert_eq!(aapl.price_direction, PriceDirection::Up);
        assert_eq!(aapl.totals.as_ref().map(|t| t.quantity), Some(dec!(20)));
        assert_eq!(aapl.rows.len(), 2);
    }

    #[test]
    fn test_rows_carry_metrics() {
        let view = sample_view();
        let rows = &view.symbols[0].rows;

        assert_eq!(rows[0].gain_percentage, Some(dec!(10.00)));
        assert_eq!(rows[0].gain_amount, Some(dec!(100.00)));
        assert_eq!(rows[0].price_direction, PriceDirection::Up);

        assert_eq!(rows[1].gain_percentage, Some(dec!(-8.33)));
        assert_eq!(rows[1].gain_amount, Some(dec!(-100.00)));
        assert_eq!(rows[1].price_direction, PriceDirection::Down);
    }

    #[test]
    fn test_zero_entry_price_row_has_no_gain() {
        let view = sample_view();
        let row = &view.symbols[1].rows[0];

        assert_eq!(row.gain_percentage, None);
        assert_eq!(row.gain_amount, None);
        assert_eq!(row.average_entry_price, Decimal::ZERO);
        assert_eq!(row.price_direction, PriceDirection::Up);
    }

    #[test]
    fn test_empty_bucket_has_no_view() {
        let bucket = SymbolBucket {
            symbol: "NONE".to_string(),
            positions: vec![],
        };
        assert!(SymbolView::from_bucket(&bucket).is_none());
    }

    #[test]
    fn test_text_rendering() {
        let row = PositionRow::from_position(&position(
            "AAPL",
            1,
            dec!(100),
            dec!(110),
            dec!(1000),
        ));
        assert_eq!(row.to_string(), "  100.00$  10.00%  100.00$  1000.00$");

        let rendered = sample_view().to_string();
        assert!(rendered.starts_with("AAPL 110.00$ (up)\n"));
        assert!(rendered.contains("\nFREE 3.00$ (up)\n"));
        assert!(rendered.contains("  0.00$  n/a  n/a  0.00$"));
    }

    #[test]
    fn test_json_rendering_is_camel_case() {
        let json = serde_json::to_value(sample_view()).unwrap();
        let first = &json["symbols"][0];
        assert_eq!(first["symbol"], "AAPL");
        assert_eq!(first["priceDirection"], "up");
        assert!(first["rows"][0].get("gainPercentage").is_some());
        assert!(json["symbols"][1]["rows"][0]["gainAmount"].is_null());
    }

    #[test]
    fn test_overflowing_bucket_still_renders() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let big = Position {
            current_market_value: huge,
            ..position("BIG", 9, dec!(100), dec!(110), dec!(1000))
        };
        let accounts: AccountPositions = vec![("acc1", vec![big.clone()]), ("acc2", vec![big])]
            .into_iter()
            .collect();

        let view = PortfolioView::build(&group_by_symbol(&accounts));

        assert_eq!(view.symbols.len(), 1);
        assert_eq!(view.symbols[0].totals, None);
        assert_eq!(view.symbols[0].rows.len(), 2);
        assert_eq!(view.symbols[0].rows[0].gain_percentage, Some(dec!(10.00)));
    }
}
