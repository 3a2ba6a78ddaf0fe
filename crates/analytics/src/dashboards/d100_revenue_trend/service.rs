use chrono::NaiveDate;
use contracts::dashboards::d100_revenue_trend::{Bucket, RevenueTrend, RevenueTrendRequest};
use contracts::domain::a003_transaction::TransactionRecord;
use contracts::enums::{Bucketing, TransactionType};
use std::collections::BTreeMap;

use crate::shared::period::BucketPeriod;
use crate::shared::record::well_formed;

/// Revenue trend for a chart request
pub fn get_revenue_trend(records: &[TransactionRecord], request: &RevenueTrendRequest) -> RevenueTrend {
    aggregate_with_diagnostics(records, request.bucketing, request.filter_type)
}

/// Group records into time buckets and sum quantity × unit price per bucket.
///
/// Buckets come back in chronological order. Malformed records are dropped
/// silently, use [`aggregate_with_diagnostics`] to learn how many.
pub fn aggregate(
    records: &[TransactionRecord],
    bucketing: Bucketing,
    filter_type: Option<TransactionType>,
) -> Vec<Bucket> {
    aggregate_with_diagnostics(records, bucketing, filter_type).buckets
}

/// Same as [`aggregate`], also reporting the number of malformed records.
///
/// `skipped` counts every malformed record of the input, whatever its type.
pub fn aggregate_with_diagnostics(
    records: &[TransactionRecord],
    bucketing: Bucketing,
    filter_type: Option<TransactionType>,
) -> RevenueTrend {
    let (valid, skipped) = well_formed(records);

    // Keyed by period start: string order of "Feb 24" / "Jan 24" is not chronological
    let mut by_period: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();

    for record in valid
        .iter()
        .filter(|r| filter_type.map_or(true, |t| r.record.transaction_type == t))
    {
        let period = BucketPeriod::of(record.occurred_at, bucketing);
        let bucket = by_period.entry(period.start).or_insert_with(|| Bucket {
            key: period.key,
            total_value: 0.0,
            count: 0,
        });
        bucket.total_value += record.value();
        bucket.count += 1;
    }

    let buckets: Vec<Bucket> = by_period.into_values().collect();

    if skipped > 0 {
        tracing::info!(
            "Revenue trend ({}): {} buckets, {} malformed records skipped",
            bucketing.code(),
            buckets.len(),
            skipped
        );
    }

    RevenueTrend { buckets, skipped }
}
