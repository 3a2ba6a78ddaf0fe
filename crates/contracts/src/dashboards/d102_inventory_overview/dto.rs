use crate::domain::a003_transaction::TransactionRecord;
use serde::{Deserialize, Serialize};

/// Headline numbers of the dashboard landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub total_products: usize,
    /// Products at or below their low stock threshold
    pub low_stock_products: usize,
    /// Σ unit price × quantity on hand
    pub stock_value: f64,
    pub recent_transactions: Vec<TransactionRecord>,
}

/// Direction of the latest change in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Summary statistics over a series of chart values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
    /// Change between the last two values, in percent
    pub percentage_change: f64,
}
