pub mod d100_revenue_trend;
pub mod d101_top_products;
pub mod d102_inventory_overview;

use contracts::dashboards::d100_revenue_trend::RevenueTrendRequest;
use contracts::dashboards::d101_top_products::TopProductsRequest;
use contracts::enums::TransactionType;
use contracts::shared::snapshot::{DashboardReport, Snapshot};

use crate::shared::config::Config;
use crate::shared::search::matcher::search;

/// Compute every dashboard widget for one snapshot
pub fn build_dashboard(snapshot: &Snapshot, config: &Config, query: Option<&str>) -> DashboardReport {
    let overview = d102_inventory_overview::service::inventory_overview(
        &snapshot.products,
        &snapshot.transactions,
        config.dashboard.recent_transactions,
    );

    let trend_request = RevenueTrendRequest {
        bucketing: config.analytics.bucketing,
        filter_type: Some(TransactionType::StockOut),
    };
    let revenue_trend = d100_revenue_trend::service::get_revenue_trend(&snapshot.transactions, &trend_request);

    let bucket_totals: Vec<f64> = revenue_trend.buckets.iter().map(|b| b.total_value).collect();
    let revenue_summary = d102_inventory_overview::service::summary_stats(&bucket_totals);

    let top_request = TopProductsRequest {
        n: config.analytics.top_products_limit,
        by: config.analytics.top_products_by,
    };
    let top_products =
        d101_top_products::service::get_top_products(&snapshot.transactions, &snapshot.products, &top_request);

    let search_results = query.map(|q| {
        search(
            q,
            &snapshot.products,
            &snapshot.categories,
            &snapshot.transactions,
        )
    });

    DashboardReport {
        overview,
        revenue_trend,
        revenue_summary,
        top_products,
        search_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d102_inventory_overview::Trend;

    const SNAPSHOT: &str = r#"{
        "products": [
            {"id": "P1", "name": "Laptop Pro", "sku": "LP-1", "categoryId": "c1", "unitPrice": 1500, "quantityOnHand": 3, "lowStockThreshold": 5},
            {"id": "P2", "name": "Mouse", "sku": "MS-1", "categoryId": "c1", "price": 20, "quantity": 40, "threshold": 10}
        ],
        "categories": [{"id": "c1", "name": "Electronics"}],
        "transactions": [
            {"id": "t1", "productId": "P1", "type": "stock-out", "quantity": 2, "unitPrice": 10, "occurredAt": "2024-01-05T00:00:00Z"},
            {"id": "t2", "productId": "P1", "type": "stock-out", "quantity": 1, "unitPrice": 10, "occurredAt": "2024-02-01T00:00:00Z"},
            {"id": "t3", "productId": "P2", "type": "restock", "quantity": 100, "price": 15, "date": "2024-02-03"},
            {"id": "t4", "productId": "P2", "type": "sale", "quantity": 1, "price": 20, "date": "not a date"}
        ]
    }"#;

    fn config() -> Config {
        toml::from_str("").unwrap()
    }

    #[test]
    fn test_build_dashboard() {
        let snapshot: Snapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let report = build_dashboard(&snapshot, &config(), Some("lap"));

        assert_eq!(report.overview.total_products, 2);
        assert_eq!(report.overview.low_stock_products, 1);
        assert_eq!(report.overview.stock_value, 4500.0 + 800.0);
        assert_eq!(report.overview.recent_transactions.len(), 4);

        let keys: Vec<&str> = report.revenue_trend.buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["Jan 24", "Feb 24"]);
        assert_eq!(report.revenue_trend.skipped, 1);

        let summary = report.revenue_summary.unwrap();
        assert_eq!(summary.total, 30.0);
        assert_eq!(summary.trend, Trend::Down);

        assert_eq!(report.top_products.len(), 1);
        assert_eq!(report.top_products[0].product_id, "P1");
        assert_eq!(report.top_products[0].quantity, 3);

        let results = report.search_results.unwrap();
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "t1", "t2"]);
    }

    #[test]
    fn test_unreadable_fields_are_skipped_not_fatal() {
        let json = r#"{
            "products": [{"id": "P1", "name": "Laptop Pro"}],
            "transactions": [
                {"id": "t1", "productId": "P1", "type": "stock-out", "quantity": 2, "unitPrice": 10, "occurredAt": "2024-01-05T00:00:00Z"},
                {"id": "t2", "productId": "P1", "type": "stock-out", "quantity": null, "unitPrice": 10, "occurredAt": "2024-01-06T00:00:00Z"}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        let report = build_dashboard(&snapshot, &config(), None);

        assert_eq!(report.revenue_trend.skipped, 1);
        assert_eq!(report.revenue_trend.buckets.len(), 1);
        assert_eq!(report.revenue_trend.buckets[0].total_value, 20.0);
        assert_eq!(report.top_products[0].quantity, 2);

        let with_string_quantity = json.replace("\"quantity\": null", "\"quantity\": \"3\"");
        let snapshot: Snapshot = serde_json::from_str(&with_string_quantity).unwrap();
        assert_eq!(build_dashboard(&snapshot, &config(), None).revenue_trend.skipped, 1);

        let with_numeric_date = json.replace("\"occurredAt\": \"2024-01-05T00:00:00Z\"", "\"occurredAt\": 1704412800");
        let snapshot: Snapshot = serde_json::from_str(&with_numeric_date).unwrap();
        assert_eq!(build_dashboard(&snapshot, &config(), None).revenue_trend.skipped, 2);
    }

    #[test]
    fn test_build_dashboard_without_query() {
        let report = build_dashboard(&Snapshot::default(), &config(), None);
        assert!(report.revenue_trend.buckets.is_empty());
        assert!(report.revenue_summary.is_none());
        assert!(report.top_products.is_empty());
        assert!(report.search_results.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("searchResults").is_none());
    }
}
