pub mod bar_chart;
pub mod dashboard;
pub mod filters;
pub mod loader;

pub use dashboard::TotalSalesReport;
