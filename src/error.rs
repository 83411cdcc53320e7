use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("sliding_window_prefix_percentage must be within 0.0..=1.0, got {0}")]
    InvalidPrefixPercentage(f64),

    #[error("sliding_window_size must be greater than zero")]
    ZeroWindowSize,

    #[error("min_score must be a finite number, got {0}")]
    InvalidMinScore(f64),
}
