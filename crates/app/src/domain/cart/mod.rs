//! Cart domain: persisted line items and the in-memory aggregate.

pub mod aggregate;
pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::CartServiceError;
pub use service::*;
