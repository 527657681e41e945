//! Configuration module for targetdoc
//!
//! Provides XDG-compliant layered configuration loading with
//! environment variable and build-property interpolation.

pub mod interpolate;
pub mod loader;
pub mod model;

pub use interpolate::{expand_properties, interpolate_config};
pub use loader::{config_paths, load_config};
pub use model::*;
