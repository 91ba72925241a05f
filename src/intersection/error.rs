//! Construction errors for intersections.

use thiserror::Error;

/// A single rule a timing configuration broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{field} duration must be positive (got {millis}ms)")]
    NonPositiveDuration { field: &'static str, millis: i64 },
}

/// Errors that can occur when constructing an intersection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Every violated rule is reported, not just the first.
    #[error("Invalid configuration: {}", join(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}

impl ConfigError {
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
        }
    }
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
