// Core modules
pub mod commands;
pub mod config;

// Re-export commonly used types
pub use config::{Config, LogConfig, OutputConfig};

// Re-export crate modules
pub use move_bcs_codec as codec;
pub use move_bcs_types as types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
