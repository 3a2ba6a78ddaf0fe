//! Tabular reports offered for download on the reports page.

pub mod export;
pub mod r200_inventory;
pub mod r201_sales;
pub mod r202_low_stock;

use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use std::collections::HashMap;

const UNCATEGORIZED: &str = "Uncategorized";

/// category id -> category name
fn category_names(categories: &[Category]) -> HashMap<&str, &str> {
    categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect()
}

fn category_of(product: &Product, names: &HashMap<&str, &str>) -> String {
    product
        .category_id
        .as_deref()
        .and_then(|id| names.get(id).copied())
        .unwrap_or(UNCATEGORIZED)
        .to_string()
}
