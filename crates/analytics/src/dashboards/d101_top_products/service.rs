use contracts::dashboards::d101_top_products::{RankedProduct, TopProductsRequest};
use contracts::domain::a002_product::Product;
use contracts::domain::a003_transaction::TransactionRecord;
use contracts::enums::{RankBy, TransactionType};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::shared::record::well_formed;

/// Top products for a widget request
pub fn get_top_products(
    records: &[TransactionRecord],
    products: &[Product],
    request: &TopProductsRequest,
) -> Vec<RankedProduct> {
    top_products(records, products, request.n, request.by)
}

/// Rank products by what they sold (stock-out records only).
///
/// Ties are broken by ascending product id. `n <= 0` gives an empty list and
/// an `n` above the number of sold products gives all of them.
pub fn top_products(
    records: &[TransactionRecord],
    products: &[Product],
    n: i64,
    by: RankBy,
) -> Vec<RankedProduct> {
    let limit = usize::try_from(n).unwrap_or(0);
    if limit == 0 {
        return Vec::new();
    }

    let (valid, _) = well_formed(records);

    // product_id -> (units, revenue)
    let mut totals: HashMap<&str, (u64, f64)> = HashMap::new();
    for record in valid
        .iter()
        .filter(|r| r.record.transaction_type == TransactionType::StockOut)
    {
        let entry = totals.entry(record.record.product_id.as_str()).or_insert((0, 0.0));
        entry.0 = entry.0.saturating_add(record.quantity);
        entry.1 += record.value();
    }

    let catalog: HashMap<&str, &Product> = products.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut ranked: Vec<RankedProduct> = totals
        .into_iter()
        .map(|(product_id, (quantity, revenue))| {
            let product = catalog.get(product_id);
            RankedProduct {
                product_id: product_id.to_string(),
                product_name: product.map(|p| p.name.clone()),
                sku: product.map(|p| p.sku.clone()),
                quantity,
                revenue,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        let primary = match by {
            RankBy::Quantity => b.quantity.cmp(&a.quantity),
            RankBy::Revenue => b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal),
        };
        primary.then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(limit);

    ranked
}
