//! A vehicle profile that plans travels over a distance.

use serde::{Deserialize, Serialize};

use physica_units::{standard, Quantity};

use crate::error::MotionError;
use crate::motion::{RampMotion, UniformMotion};

/// Cruise velocity plus optional acceleration and braking rates. With no
/// rates the vehicle is treated as always at cruise velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    velocity: Quantity,
    acceleration: Option<Quantity>,
    braking: Option<Quantity>,
}

/// A planned travel: uniform when the vehicle has no acceleration profile,
/// ramped otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Travel {
    Uniform(UniformMotion),
    Ramped(RampMotion),
}

impl Travel {
    pub fn distance(&self) -> Quantity {
        match self {
            Travel::Uniform(motion) => motion.distance(),
            Travel::Ramped(motion) => motion.distance(),
        }
    }

    pub fn time(&self) -> Quantity {
        match self {
            Travel::Uniform(motion) => motion.time(),
            Travel::Ramped(motion) => motion.time(),
        }
    }
}

impl Vehicle {
    pub fn new(velocity: Quantity) -> Result<Self, MotionError> {
        crate::motion::expect_family(&velocity, standard::VELOCITY, "velocity")?;
        if velocity.value() <= 0.0 {
            return Err(MotionError::NonPositive("velocity"));
        }
        Ok(Vehicle {
            velocity,
            acceleration: None,
            braking: None,
        })
    }

    pub fn with_acceleration(mut self, acceleration: Quantity) -> Result<Self, MotionError> {
        crate::motion::expect_family(&acceleration, standard::ACCELERATION, "acceleration")?;
        if acceleration.value() <= 0.0 {
            return Err(MotionError::NonPositive("acceleration"));
        }
        self.acceleration = Some(acceleration);
        Ok(self)
    }

    /// Braking rate; without one the acceleration rate is reused.
    pub fn with_braking(mut self, braking: Quantity) -> Result<Self, MotionError> {
        crate::motion::expect_family(&braking, standard::ACCELERATION, "braking")?;
        if braking.value() <= 0.0 {
            return Err(MotionError::NonPositive("braking"));
        }
        self.braking = Some(braking);
        Ok(self)
    }

    pub fn velocity(&self) -> Quantity {
        self.velocity
    }

    /// Plan a travel over `distance`, from standstill to standstill when the
    /// vehicle has an acceleration profile.
    pub fn travel(&self, distance: Quantity) -> Result<Travel, MotionError> {
        match self.acceleration {
            None => Ok(Travel::Uniform(UniformMotion::from_distance_velocity(
                distance,
                self.velocity,
            )?)),
            Some(acceleration) => {
                let braking = self.braking.unwrap_or(acceleration);
                Ok(Travel::Ramped(RampMotion::with_distance(
                    self.velocity,
                    acceleration,
                    braking,
                    distance,
                )?))
            }
        }
    }
}
