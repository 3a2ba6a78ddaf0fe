use crate::enums::RankBy;
use serde::{Deserialize, Serialize};

/// Request for the top products widget
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProductsRequest {
    /// Maximum number of rows, values ≤ 0 yield an empty list
    pub n: i64,
    #[serde(default)]
    pub by: RankBy,
}

/// Product with its cumulative sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub product_id: String,
    /// Joined from the catalog, None if the product is not in the snapshot
    pub product_name: Option<String>,
    pub sku: Option<String>,
    /// Units sold
    pub quantity: u64,
    /// Units sold × unit price of each sale
    pub revenue: f64,
}
