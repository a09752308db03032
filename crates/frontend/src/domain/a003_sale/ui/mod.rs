pub mod list;
pub mod new_sale;
pub mod page;
pub mod summary;

pub use page::SalesScreen;
