//! Global search over the lists already loaded into the dashboard.
//!
//! Stateless and synchronous. Debouncing keystrokes is up to the caller.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_transaction::TransactionRecord;
use contracts::shared::search::{SearchResult, SearchResultKind};
use std::collections::HashMap;

/// Case-insensitive substring search across products, categories and transactions.
///
/// Results are ordered products first, then categories, then transactions,
/// each group in input order. Transactions match on the name of their product.
pub fn search(
    query: &str,
    products: &[Product],
    categories: &[Category],
    transactions: &[TransactionRecord],
) -> Vec<SearchResult> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches = |name: &str| name.to_lowercase().contains(&needle);

    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let product_names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut results = Vec::new();

    results.extend(products.iter().filter(|p| matches(&p.name)).map(|p| {
        let category = p
            .category_id
            .as_deref()
            .and_then(|id| category_names.get(id).copied())
            .unwrap_or("Uncategorized");
        SearchResult {
            id: p.id.clone(),
            kind: SearchResultKind::Product,
            title: p.name.clone(),
            description: format!("{} - {} in stock", category, p.quantity_on_hand),
            target_url: format!("/products/{}", p.id),
        }
    }));

    results.extend(categories.iter().filter(|c| matches(&c.name)).map(|c| SearchResult {
        id: c.id.clone(),
        kind: SearchResultKind::Category,
        title: c.name.clone(),
        description: c
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description".to_string()),
        target_url: format!("/categories/{}", c.id),
    }));

    results.extend(transactions.iter().filter_map(|t| {
        let product_name = product_names.get(t.product_id.as_str()).copied()?;
        if !matches(product_name) {
            return None;
        }
        Some(SearchResult {
            id: t.id.clone(),
            kind: SearchResultKind::Transaction,
            title: product_name.to_string(),
            description: format!("{} - {} units", t.transaction_type, t.quantity),
            target_url: format!("/transactions/{}", t.id),
        })
    }));

    tracing::debug!("Search {:?}: {} results", query.trim(), results.len());

    results
}
