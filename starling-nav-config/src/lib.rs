//! Navigation configuration for the Starling client.
//!
//! This crate owns the serializable navigation types and their persistence:
//!
//! - Tab identity types (`Tab`, `SidebarEntry`, `ComposeVisibility`)
//! - `NavConfig`: the user-customizable phone and sidebar tab orders,
//!   loaded from and saved to a YAML file under the platform config dir
//! - `SharedNavConfig`: the explicitly injected, versioned handle the
//!   runtime core reads the orders through
//!
//! Runtime selection state lives in the `starling-nav` root crate; nothing
//! here is mutated implicitly at runtime.

pub mod config;
mod error;
mod types;

// Re-export main types for convenience
pub use config::{NavConfig, SharedNavConfig};
pub use error::ConfigError;
pub use types::{ComposeVisibility, SidebarEntry, Tab};
