use serde::{Deserialize, Serialize};

/// Row of the sales report, one per sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    /// Date of the sale in UTC, "YYYY-MM-DD"
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
    #[serde(rename = "Unit Price")]
    pub unit_price: String,
    #[serde(rename = "Total")]
    pub total: String,
}
