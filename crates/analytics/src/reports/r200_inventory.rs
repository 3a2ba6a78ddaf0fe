use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::reports::r200_inventory::InventoryReportRow;

use super::{category_names, category_of};
use crate::shared::format::format_money;

/// One row per catalog product, in catalog order
pub fn inventory_report(products: &[Product], categories: &[Category]) -> Vec<InventoryReportRow> {
    let names = category_names(categories);

    products
        .iter()
        .map(|p| InventoryReportRow {
            sku: p.sku.clone(),
            name: p.name.clone(),
            category: category_of(p, &names),
            in_stock: p.quantity_on_hand,
            low_stock_threshold: p.low_stock_threshold,
            price: format_money(p.unit_price),
            value: format_money(p.stock_value()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_report() {
        let mut chair = Product::new("1", "Chair");
        chair.sku = "CH-1".to_string();
        chair.category_id = Some("c1".to_string());
        chair.unit_price = 45.5;
        chair.quantity_on_hand = 4;
        chair.low_stock_threshold = 2;
        let lamp = Product::new("2", "Lamp");

        let rows = inventory_report(&[chair, lamp], &[Category::new("c1", "Furniture")]);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            InventoryReportRow {
                sku: "CH-1".to_string(),
                name: "Chair".to_string(),
                category: "Furniture".to_string(),
                in_stock: 4,
                low_stock_threshold: 2,
                price: "45.50".to_string(),
                value: "182.00".to_string(),
            }
        );
        assert_eq!(rows[1].category, "Uncategorized");
    }
}
