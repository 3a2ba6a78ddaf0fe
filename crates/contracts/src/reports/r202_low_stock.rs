use serde::{Deserialize, Serialize};

/// Row of the low stock report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockReportRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Current Stock")]
    pub current_stock: i64,
    #[serde(rename = "Low Stock Threshold")]
    pub low_stock_threshold: i64,
    /// Quantity to order to get back to twice the threshold
    #[serde(rename = "Reorder Quantity")]
    pub reorder_quantity: i64,
}
