pub mod config;
pub mod format;
pub mod logger;
pub mod period;
pub mod record;
pub mod search;
