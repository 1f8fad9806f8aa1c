use rust_decimal::prelude::*;

use crate::api::Statistics;

/// Text of the three statistics lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryLines {
    pub total_sales: String,
    pub sold_items: String,
    pub unsold_items: String,
}

impl From<&Statistics> for SummaryLines {
    fn from(stats: &Statistics) -> Self {
        Self {
            total_sales: format!("Total Sales: ${}", format_cents(stats.total_sales)),
            sold_items: format!("Sold Items: {}", stats.sold_items),
            unsold_items: format!("Unsold Items: {}", stats.unsold_items),
        }
    }
}

/// Two decimal places, rounding exact midpoints away from zero
/// (1.125 -> "1.13", where `{:.2}` would give "1.12")
fn format_cents(amount: f64) -> String {
    // -0.0 prints as "0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };

    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        // beyond Decimal's range
        None => format!("{:.2}", amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let stats = Statistics {
            total_sales: 1234.5,
            sold_items: 7,
            unsold_items: 3,
        };
        let lines = SummaryLines::from(&stats);
        assert_eq!(lines.total_sales, "Total Sales: $1234.50");
        assert_eq!(lines.sold_items, "Sold Items: 7");
        assert_eq!(lines.unsold_items, "Unsold Items: 3");
    }

    #[test]
    fn test_total_sales_rounds_to_cents() {
        let stats = Statistics {
            total_sales: 0.0,
            sold_items: 0,
            unsold_items: 0,
        };
        assert_eq!(SummaryLines::from(&stats).total_sales, "Total Sales: $0.00");

        let stats = Statistics {
            total_sales: 99.999,
            ..stats
        };
        assert_eq!(SummaryLines::from(&stats).total_sales, "Total Sales: $100.00");
    }

    #[test]
    fn test_total_sales_rounds_midpoints_up() {
        let stats = Statistics {
            total_sales: 1.125,
            sold_items: 0,
            unsold_items: 0,
        };
        assert_eq!(SummaryLines::from(&stats).total_sales, "Total Sales: $1.13");

        let stats = Statistics {
            total_sales: 10.625,
            ..stats
        };
        assert_eq!(SummaryLines::from(&stats).total_sales, "Total Sales: $10.63");
    }

    #[test]
    fn test_format_cents_keeps_binary_value() {
        // 1.005 is stored just below the midpoint
        assert_eq!(format_cents(1.005), "1.00");
        assert_eq!(format_cents(2.675), "2.67");
        assert_eq!(format_cents(0.5), "0.50");
        assert_eq!(format_cents(-0.0), "0.00");
        assert_eq!(format_cents(-1.125), "-1.13");
        assert_eq!(format_cents(1e30), format!("{:.2}", 1e30));
    }
}
