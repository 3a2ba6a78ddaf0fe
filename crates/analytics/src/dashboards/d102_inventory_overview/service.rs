use contracts::dashboards::d102_inventory_overview::{InventoryOverview, SummaryStats, Trend};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_transaction::TransactionRecord;

/// Change (in percent) beyond which a series counts as trending
const TREND_THRESHOLD_PERCENT: f64 = 1.0;

/// Headline numbers for the dashboard landing page.
///
/// `recent_transactions` keeps the first `recent_limit` records in the order
/// the fetcher delivered them.
pub fn inventory_overview(
    products: &[Product],
    transactions: &[TransactionRecord],
    recent_limit: usize,
) -> InventoryOverview {
    InventoryOverview {
        total_products: products.len(),
        low_stock_products: low_stock_products(products).len(),
        stock_value: products.iter().map(Product::stock_value).sum(),
        recent_transactions: transactions.iter().take(recent_limit).cloned().collect(),
    }
}

/// Products at or below their low stock threshold, in input order
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Total, average, extremes and latest trend of a series.
///
/// Non-finite values are ignored; None when nothing is left.
pub fn summary_stats(values: &[f64]) -> Option<SummaryStats> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }

    let total: f64 = values.iter().sum();
    let average = total / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let percentage_change = match values.as_slice() {
        [.., previous, last] if *previous != 0.0 => (last - previous) / previous * 100.0,
        _ => 0.0,
    };

    let trend = if percentage_change > TREND_THRESHOLD_PERCENT {
        Trend::Up
    } else if percentage_change < -TREND_THRESHOLD_PERCENT {
        Trend::Down
    } else {
        Trend::Stable
    };

    Some(SummaryStats {
        total,
        average,
        min,
        max,
        trend,
        percentage_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::TransactionType;

    fn product(id: &str, price: f64, on_hand: i64, threshold: i64) -> Product {
        let mut p = Product::new(id, format!("Product {}", id));
        p.unit_price = price;
        p.quantity_on_hand = on_hand;
        p.low_stock_threshold = threshold;
        p
    }

    #[test]
    fn test_overview() {
        let products = vec![
            product("1", 10.0, 5, 10),
            product("2", 2.5, 100, 10),
            product("3", 1.0, 10, 10),
        ];
        let transactions: Vec<TransactionRecord> = (0..8)
            .map(|i| {
                TransactionRecord::new(format!("t{}", i), "1", TransactionType::StockIn, 1.0, 1.0, "2024-01-01")
            })
            .collect();

        let overview = inventory_overview(&products, &transactions, 5);
        assert_eq!(overview.total_products, 3);
        assert_eq!(overview.low_stock_products, 2);
        assert_eq!(overview.stock_value, 50.0 + 250.0 + 10.0);
        let ids: Vec<&str> = overview.recent_transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2", "t3", "t4"]);

        let low: Vec<&str> = low_stock_products(&products).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(low, vec!["1", "3"]);
    }

    #[test]
    fn test_overview_empty() {
        let overview = inventory_overview(&[], &[], 5);
        assert_eq!(overview.total_products, 0);
        assert_eq!(overview.stock_value, 0.0);
        assert!(overview.recent_transactions.is_empty());
    }

    #[test]
    fn test_summary_stats() {
        let stats = summary_stats(&[10.0, 30.0, 20.0, 25.0]).unwrap();
        assert_eq!(stats.total, 85.0);
        assert_eq!(stats.average, 21.25);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.percentage_change, 25.0);
        assert_eq!(stats.trend, Trend::Up);

        let down = summary_stats(&[100.0, 50.0]).unwrap();
        assert_eq!(down.trend, Trend::Down);
        assert_eq!(down.percentage_change, -50.0);

        let flat = summary_stats(&[100.0, 100.5]).unwrap();
        assert_eq!(flat.trend, Trend::Stable);
    }

    #[test]
    fn test_summary_stats_edge_cases() {
        assert!(summary_stats(&[]).is_none());
        assert!(summary_stats(&[f64::NAN]).is_none());

        let single = summary_stats(&[7.0]).unwrap();
        assert_eq!(single.trend, Trend::Stable);
        assert_eq!(single.percentage_change, 0.0);

        let from_zero = summary_stats(&[0.0, 12.0]).unwrap();
        assert_eq!(from_zero.trend, Trend::Stable);
        assert_eq!(from_zero.max, 12.0);
    }
}
