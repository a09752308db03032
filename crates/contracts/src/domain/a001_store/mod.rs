pub mod aggregate;

pub use aggregate::{no_officer_warning, sort_stores, Store, StoreDetails};
