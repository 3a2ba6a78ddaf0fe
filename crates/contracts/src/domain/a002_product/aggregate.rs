use serde::{Deserialize, Serialize};

/// Read-only snapshot of a catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(alias = "price", default)]
    pub unit_price: f64,
    #[serde(alias = "quantity", default)]
    pub quantity_on_hand: i64,
    #[serde(alias = "threshold", default)]
    pub low_stock_threshold: i64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: String::new(),
            category_id: None,
            unit_price: 0.0,
            quantity_on_hand: 0,
            low_stock_threshold: 0,
        }
    }

    /// Stock is at or below the threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand <= self.low_stock_threshold
    }

    /// Value of the goods on hand at the catalog price
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.quantity_on_hand as f64
    }
}
