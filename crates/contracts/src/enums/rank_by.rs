use serde::{Deserialize, Serialize};

/// Ranking criterion for the top products widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    /// Cumulative sold units
    #[default]
    Quantity,
    /// Cumulative sold units × unit price
    Revenue,
}
