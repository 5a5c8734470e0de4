//! Service layer for areas, machines and maintenance logs.
//! - Every write runs inside its own transaction: begin, write, commit.
//!   An error drops the transaction, which rolls it back.
//! - Only presence of required fields is checked here; the store enforces
//!   uniqueness and ownership.

pub mod errors;
pub mod area_service;
pub mod machine_service;
pub mod maintenance_service;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
