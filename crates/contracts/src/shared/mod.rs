pub mod search;
pub mod snapshot;
