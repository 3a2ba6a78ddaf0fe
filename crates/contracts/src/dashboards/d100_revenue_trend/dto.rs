use crate::enums::{Bucketing, TransactionType};
use serde::{Deserialize, Serialize};

/// Request for the revenue trend chart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrendRequest {
    pub bucketing: Bucketing,
    /// Only records of this type are counted, all types when None
    #[serde(default)]
    pub filter_type: Option<TransactionType>,
}

/// One point of the revenue trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Label of the period, e.g. "2024-01-05", "2024-W01" or "Jan 24"
    pub key: String,
    /// Sum of quantity × unit price over the period
    pub total_value: f64,
    /// Number of records in the period
    pub count: u64,
}

/// Revenue trend with diagnostics about dropped input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrend {
    /// Buckets in chronological order
    pub buckets: Vec<Bucket>,
    /// Number of malformed records left out of the result
    pub skipped: usize,
}
