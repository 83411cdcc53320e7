//! Configuration loading
//!
//! Ranking settings come from an explicit config file or one discovered in the
//! project root, falling back to defaults. CLI flags override loaded values.

pub mod loader;

pub use loader::load_config;
