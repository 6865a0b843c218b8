//! Shared primitives for the Motordesk dealership dashboard.
//!
//! Holds the identifier and timestamp aliases used by every other crate,
//! plus the domain-level error enum.

pub mod error;
pub mod types;
