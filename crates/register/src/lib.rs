//! Till Register
//!
//! Register client for the till back office: fetches the catalog, builds orders against the
//! cached ledger and commits them over HTTP.

pub mod backend;
pub mod config;
pub mod order;
mod wire;

pub use backend::{BackendError, HttpBackend};
