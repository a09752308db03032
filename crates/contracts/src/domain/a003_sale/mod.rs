pub mod aggregate;
pub mod filter;
pub mod form;

pub use aggregate::{CreateSaleRequest, SaleApiItem, SaleRecord, SalesPage};
pub use filter::SalesFilter;
pub use form::{NewSaleForm, SaleFormError};
