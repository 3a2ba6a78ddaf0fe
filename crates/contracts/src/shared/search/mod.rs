use serde::{Deserialize, Serialize};

/// Kind of entity a search result points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Product,
    Category,
    Transaction,
}

/// Entry of the global search dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub kind: SearchResultKind,
    pub title: String,
    pub description: String,
    /// Client route opened on click, e.g. "/products/42"
    pub target_url: String,
}
