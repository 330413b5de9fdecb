//! Configuration: TOML file with timing knobs for the UI.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
