//! Game-specific error types.
//!
//! Systems propagate errors through these types rather than panicking, so a
//! bad config file or a stale entity reference degrades gracefully instead of
//! crashing the game.

use std::fmt;

/// Top-level error enum for the brick breaker.
#[derive(Debug)]
pub enum GameError {
    /// The config file exists but could not be read.
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has mistyped keys.
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    /// A configuration value is outside its accepted range.
    InvalidConfig {
        /// Name of the offending field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// An entity named in a collision event could not be found in the world.
    /// Usually a brick that another event already destroyed this frame.
    EntityNotFound {
        /// Human-readable description of where the lookup occurred.
        context: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            GameError::ConfigParse { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
            GameError::EntityNotFound { context } => {
                write!(f, "entity not found during '{}'", context)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` lies in `[0, 1]`.
pub fn validate_probability(name: &'static str, value: f64) -> GameResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "a probability in [0, 1]",
        })
    }
}

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value: value as f64,
            expected: "a finite value > 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds_are_inclusive() {
        assert!(validate_probability("p", 0.0).is_ok());
        assert!(validate_probability("p", 1.0).is_ok());
        assert!(validate_probability("p", -0.01).is_err());
        assert!(validate_probability("p", 1.01).is_err());
        assert!(validate_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(validate_positive("w", 1.0).is_ok());
        assert!(validate_positive("w", 0.0).is_err());
        assert!(validate_positive("w", f32::NAN).is_err());
        assert!(validate_positive("w", f32::INFINITY).is_err());
    }

    #[test]
    fn invalid_config_display_names_field() {
        let err = validate_positive("ball_radius", -2.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ball_radius"), "got: {msg}");
        assert!(msg.contains("-2"), "got: {msg}");
    }
}
