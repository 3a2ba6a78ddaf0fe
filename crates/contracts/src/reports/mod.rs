pub mod r200_inventory;
pub mod r201_sales;
pub mod r202_low_stock;
