use chrono::{DateTime, Utc};
use contracts::domain::a003_transaction::TransactionRecord;
use thiserror::Error;

use super::period::parse_occurred_at;

/// Why a transaction record cannot take part in a computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("quantity is not a finite number: {0}")]
    NonFiniteQuantity(f64),

    #[error("quantity is negative: {0}")]
    NegativeQuantity(f64),

    #[error("quantity is not a whole number: {0}")]
    FractionalQuantity(f64),

    #[error("quantity does not fit a 64-bit unit count: {0}")]
    QuantityOutOfRange(f64),

    #[error("unit price is not a finite number: {0}")]
    NonFiniteUnitPrice(f64),

    #[error("unit price is negative: {0}")]
    NegativeUnitPrice(f64),

    #[error("unparseable timestamp: {0:?}")]
    UnparseableTimestamp(String),
}

/// Record whose numbers and timestamp have been checked
#[derive(Debug, Clone, Copy)]
pub struct ValidRecord<'a> {
    pub record: &'a TransactionRecord,
    pub quantity: u64,
    pub unit_price: f64,
    pub occurred_at: DateTime<Utc>,
}

impl ValidRecord<'_> {
    /// quantity × unit price
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

pub fn validate(record: &TransactionRecord) -> Result<ValidRecord<'_>, RecordError> {
    let quantity = record.quantity;
    if !quantity.is_finite() {
        return Err(RecordError::NonFiniteQuantity(quantity));
    }
    if quantity < 0.0 {
        return Err(RecordError::NegativeQuantity(quantity));
    }
    if quantity.fract() != 0.0 {
        return Err(RecordError::FractionalQuantity(quantity));
    }
    // u64::MAX as f64 rounds up to 2^64, the first value that no longer fits
    if quantity >= u64::MAX as f64 {
        return Err(RecordError::QuantityOutOfRange(quantity));
    }

    let unit_price = record.unit_price;
    if !unit_price.is_finite() {
        return Err(RecordError::NonFiniteUnitPrice(unit_price));
    }
    if unit_price < 0.0 {
        return Err(RecordError::NegativeUnitPrice(unit_price));
    }

    let occurred_at = parse_occurred_at(&record.occurred_at)
        .ok_or_else(|| RecordError::UnparseableTimestamp(record.occurred_at.clone()))?;

    Ok(ValidRecord {
        record,
        quantity: quantity as u64,
        unit_price,
        occurred_at,
    })
}

/// Split a batch into well-formed records and a count of dropped ones.
///
/// Dropped records are reported at debug level only.
pub fn well_formed(records: &[TransactionRecord]) -> (Vec<ValidRecord<'_>>, usize) {
    let mut valid = Vec::with_capacity(records.len());
    let mut skipped = 0usize;

    for record in records {
        match validate(record) {
            Ok(v) => valid.push(v),
            Err(e) => {
                skipped += 1;
                tracing::debug!(record_id = %record.id, error = %e, "Skipping malformed transaction");
            }
        }
    }

    (valid, skipped)
}
