//! Shared data shapes of the inventory dashboard: entities delivered by the
//! data fetcher, and the dashboard, report and search payloads computed from them.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod reports;
pub mod shared;
