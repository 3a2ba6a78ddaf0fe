pub mod aggregate;

pub use aggregate::TransactionRecord;
