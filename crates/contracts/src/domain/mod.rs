pub mod a001_store;
pub mod a002_employee;
pub mod a003_sale;
