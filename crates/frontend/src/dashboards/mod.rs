pub mod d400_sales_summary;

pub use d400_sales_summary::ui::TotalSalesReport;
