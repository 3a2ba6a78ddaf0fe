use contracts::domain::a002_product::Product;
use contracts::domain::a003_transaction::TransactionRecord;
use contracts::enums::TransactionType;
use contracts::reports::r201_sales::SalesReportRow;
use std::collections::HashMap;

use crate::shared::format::format_money;
use crate::shared::record::well_formed;

/// One row per well-formed sale, in input order
pub fn sales_report(records: &[TransactionRecord], products: &[Product]) -> Vec<SalesReportRow> {
    let catalog: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();
    let (valid, _) = well_formed(records);

    valid
        .iter()
        .filter(|r| r.record.transaction_type == TransactionType::StockOut)
        .map(|r| {
            let product = catalog.get(r.record.product_id.as_str());
            SalesReportRow {
                date: r.occurred_at.format("%Y-%m-%d").to_string(),
                product: product
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "Unknown Product".to_string()),
                sku: product.map(|p| p.sku.clone()).unwrap_or_default(),
                quantity: r.quantity,
                unit_price: format_money(r.unit_price),
                total: format_money(r.value()),
            }
        })
        .collect()
}
