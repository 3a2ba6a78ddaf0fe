use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::reports::r202_low_stock::LowStockReportRow;

use super::{category_names, category_of};

/// Products at or below threshold, with the quantity that brings them back
/// to twice the threshold
pub fn low_stock_report(products: &[Product], categories: &[Category]) -> Vec<LowStockReportRow> {
    let names = category_names(categories);

    products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| LowStockReportRow {
            sku: p.sku.clone(),
            name: p.name.clone(),
            category: category_of(p, &names),
            current_stock: p.quantity_on_hand,
            low_stock_threshold: p.low_stock_threshold,
            reorder_quantity: p
                .low_stock_threshold
                .saturating_mul(2)
                .saturating_sub(p.quantity_on_hand)
                .max(0),
        })
        .collect()
}
