//! Configuration management module

pub mod loader;

pub use loader::{Config, default_config_path};
