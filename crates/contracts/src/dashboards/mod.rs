pub mod d100_revenue_trend;
pub mod d101_top_products;
pub mod d102_inventory_overview;
