//! Errors raised when assembling a motion from quantities.

use physica_units::UnitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// A parameter carried a quantity of the wrong family.
    #[error("expected a {expected} quantity, got {got}")]
    WrongFamily {
        expected: &'static str,
        got: String,
    },

    /// A parameter that must be strictly positive was zero or negative.
    #[error("{0} must be strictly positive")]
    NonPositive(&'static str),

    /// The acceleration and braking phases alone overshoot the requested
    /// total, leaving no room for a cruise phase.
    #[error("ramp phases do not fit in the requested total {0}")]
    RampTooLong(&'static str),

    /// Relativistic factors are undefined at or beyond the speed of light.
    #[error("velocity is at or beyond the speed of light")]
    FasterThanLight,

    #[error(transparent)]
    Unit(#[from] UnitError),
}
