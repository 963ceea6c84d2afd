//! Library entrypoint for picks-engine.
//!
//! Exposes all modules so integration tests can import them.

pub mod calc;
pub mod config;
pub mod error;
pub mod odds;
pub mod validate;
