use serde::{Deserialize, Serialize};

/// Row of the inventory report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReportRow {
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "In Stock")]
    pub in_stock: i64,
    #[serde(rename = "Low Stock Threshold")]
    pub low_stock_threshold: i64,
    /// Unit price, two decimals
    #[serde(rename = "Price")]
    pub price: String,
    /// Price × stock, two decimals
    #[serde(rename = "Value")]
    pub value: String,
}
