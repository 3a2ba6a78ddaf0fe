use crate::enums::TransactionType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single stock movement exactly as received from the transactions endpoint.
///
/// Numeric and date fields are kept in their raw form: checking them is the
/// job of whoever consumes the record. A missing or non-numeric quantity or
/// price comes through as NaN, any scalar timestamp as text, so one bad
/// record cannot fail the whole batch at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub product_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default = "not_a_number", deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(alias = "price", default = "not_a_number", deserialize_with = "lenient_number")]
    pub unit_price: f64,
    #[serde(alias = "date", default, deserialize_with = "lenient_text")]
    pub occurred_at: String,
}

fn not_a_number() -> f64 {
    f64::NAN
}

/// JSON number as is, anything else (null, string, bool, object) as NaN
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).unwrap_or(f64::NAN))
}

/// Strings as is, other scalars in their JSON spelling, null and containers as ""
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    })
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        transaction_type: TransactionType,
        quantity: f64,
        unit_price: f64,
        occurred_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            transaction_type,
            quantity,
            unit_price,
            occurred_at: occurred_at.into(),
        }
    }
}
