//! Application-level utilities for the Storable CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the two store files
//! - The `AppContext` handed to every command handler

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
