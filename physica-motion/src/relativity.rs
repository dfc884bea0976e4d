//! Special-relativistic corrections for motions at a sizeable fraction of
//! the speed of light.

use physica_units::constants::SPEED_OF_LIGHT;
use physica_units::{standard, Quantity, Reduced};

use crate::error::MotionError;
use crate::motion::expect_family;

fn beta(velocity: &Quantity) -> Result<f64, MotionError> {
    expect_family(velocity, standard::VELOCITY, "velocity")?;
    let ratio = match velocity.try_div(&SPEED_OF_LIGHT)? {
        Reduced::Scalar(ratio) => ratio,
        Reduced::Quantity(_) => unreachable!("both operands are velocities"),
    };
    if ratio.abs() >= 1.0 {
        return Err(MotionError::FasterThanLight);
    }
    Ok(ratio)
}

/// `sqrt(1 - v²/c²)`, the factor lengths contract by.
pub fn contraction_factor(velocity: &Quantity) -> Result<f64, MotionError> {
    let beta = beta(velocity)?;
    Ok((1.0 - beta * beta).sqrt())
}

/// The Lorentz factor γ, the factor durations dilate by.
pub fn lorentz_factor(velocity: &Quantity) -> Result<f64, MotionError> {
    Ok(1.0 / contraction_factor(velocity)?)
}

/// A proper duration as observed from a frame moving at `velocity`.
pub fn time_dilation(time: &Quantity, velocity: &Quantity) -> Result<Quantity, MotionError> {
    expect_family(time, standard::TIME, "time")?;
    Ok(*time * lorentz_factor(velocity)?)
}

/// A proper length as observed from a frame moving at `velocity`.
pub fn length_contraction(
    distance: &Quantity,
    velocity: &Quantity,
) -> Result<Quantity, MotionError> {
    expect_family(distance, standard::DISTANCE, "distance")?;
    Ok(*distance * contraction_factor(velocity)?)
}
