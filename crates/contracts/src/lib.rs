//! Wire contracts and domain rules shared by the sales admin screens.
//!
//! Everything here is target-independent: the frontend crate owns the
//! browser plumbing, this crate owns the shapes and the arithmetic.

pub mod dashboards;
pub mod domain;
pub mod shared;
