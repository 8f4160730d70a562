//! Library surface of the delay prediction service.
//!
//! The binary lives in `main.rs`; the router and configuration are exposed
//! here so integration tests can drive the real service.

pub mod api;
pub mod config;
