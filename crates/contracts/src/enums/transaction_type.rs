use serde::{Deserialize, Serialize};

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Restock: goods received into the warehouse
    #[serde(rename = "stock-in", alias = "restock")]
    StockIn,
    /// Sale: goods shipped out of the warehouse
    #[serde(rename = "stock-out", alias = "sale")]
    StockOut,
}

impl TransactionType {
    /// Wire code of the transaction type
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::StockIn => "stock-in",
            TransactionType::StockOut => "stock-out",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_codes() {
        let parsed: TransactionType = serde_json::from_str("\"sale\"").unwrap();
        assert_eq!(parsed, TransactionType::StockOut);
        assert_eq!(
            serde_json::to_string(&TransactionType::StockIn).unwrap(),
            "\"stock-in\""
        );
        assert!(serde_json::from_str::<TransactionType>("\"refund\"").is_err());
        assert_eq!(TransactionType::StockOut.to_string(), "stock-out");
    }
}
