//! Pure in-memory computations behind the inventory dashboard: time bucketed
//! revenue, product ranking, stock overview, reports and global search.
//!
//! Every function here works on slices that the data fetcher already loaded.
//! Nothing performs I/O except the CSV writer and the host binary.

pub mod dashboards;
pub mod reports;
pub mod shared;

pub use dashboards::d100_revenue_trend::service::{aggregate, aggregate_with_diagnostics};
pub use dashboards::d101_top_products::service::top_products;
pub use shared::search::matcher::search;
