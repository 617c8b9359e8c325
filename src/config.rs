//! Navigation configuration management.
//!
//! Re-exports all configuration types from the `starling-nav-config` crate.
//! Tab orders, persistence, and the shared handle are defined there.

pub use starling_nav_config::*;
