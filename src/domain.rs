//! Core data types for snippet ranking

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Zero-based, inclusive line span of a snippet inside its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl LineRange {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self { start_line, end_line: end_line.max(start_line) }
    }

    /// True when the two spans share a line or are directly adjacent.
    pub fn touches(&self, other: &LineRange) -> bool {
        self.start_line <= other.end_line.saturating_add(1)
            && other.start_line <= self.end_line.saturating_add(1)
    }
}

/// A candidate context snippet competing for space in the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSnippet {
    pub path: String,
    pub range: LineRange,
    pub contents: String,
    /// Preset scores survive ranking untouched.
    pub score: Option<f64>,
}

impl RankedSnippet {
    pub fn new(path: impl Into<String>, range: LineRange, contents: impl Into<String>) -> Self {
        Self { path: path.into(), range, contents: contents.into(), score: None }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Characters of text around the cursor used as the ranking query.
    pub sliding_window_size: usize,
    /// Share of the window taken from before the cursor.
    pub sliding_window_prefix_percentage: f64,
    /// Token budget for snippets in the final prompt.
    pub max_snippet_tokens: usize,
    /// Snippets scoring below this are dropped.
    pub min_score: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            sliding_window_size: 500,
            sliding_window_prefix_percentage: 0.75,
            max_snippet_tokens: 614,
            min_score: 0.0,
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sliding_window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        let pct = self.sliding_window_prefix_percentage;
        if !(0.0..=1.0).contains(&pct) {
            return Err(ConfigError::InvalidPrefixPercentage(pct));
        }
        if !self.min_score.is_finite() {
            return Err(ConfigError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}
