/*
 * Error Module
 *
 * Errors raised while validating the startup configuration. The tick itself
 * has no failure modes once the configuration has been accepted.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("population must contain at least one boid")]
    EmptyPopulation,

    #[error("plane dimensions must be positive, got {width}x{height}")]
    InvalidPlane { width: f32, height: f32 },

    #[error("{what} must be a non-negative number, got {value}")]
    NegativeRadius { what: &'static str, value: f32 },

    #[error("max speed must be positive, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("field of view must lie in (0, 360] degrees, got {0}")]
    InvalidFieldOfView(f32),
}
