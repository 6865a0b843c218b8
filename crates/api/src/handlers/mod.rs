//! Request handlers, one module per resource.

pub mod clients;
pub mod emails;
pub mod knowledge;
pub mod statistics;
pub mod users;
pub mod vehicles;
pub mod waitlist;
