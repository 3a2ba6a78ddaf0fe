pub mod bucketing;
pub mod rank_by;
pub mod transaction_type;

pub use bucketing::Bucketing;
pub use rank_by::RankBy;
pub use transaction_type::TransactionType;
