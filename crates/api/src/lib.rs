//! LUCT reporting API server library.
//!
//! Exposes the config, state, error handling and routes so integration
//! tests and the binary entrypoint share one router.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod validation;
