//! Shared helpers

pub mod tokens;

pub use tokens::estimate_tokens;
