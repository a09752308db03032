pub mod aggregate;

pub use aggregate::{sort_employees, Employee};
