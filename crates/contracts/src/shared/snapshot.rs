use crate::dashboards::d100_revenue_trend::RevenueTrend;
use crate::dashboards::d101_top_products::RankedProduct;
use crate::dashboards::d102_inventory_overview::{InventoryOverview, SummaryStats};
use crate::domain::a001_category::Category;
use crate::domain::a002_product::Product;
use crate::domain::a003_transaction::TransactionRecord;
use crate::shared::search::SearchResult;
use serde::{Deserialize, Serialize};

/// Everything the data fetcher has loaded for one dashboard render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Everything the dashboard renders from one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub overview: InventoryOverview,
    /// Sales revenue per period
    pub revenue_trend: RevenueTrend,
    /// Summary over the revenue trend bucket totals
    pub revenue_summary: Option<SummaryStats>,
    pub top_products: Vec<RankedProduct>,
    /// Present when a search query was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_results: Option<Vec<SearchResult>>,
}
