//! Motions built from distance, time and velocity quantities.
//!
//! A [`UniformMotion`] is fully determined by any two of the three; the
//! third is derived through the unit tables, so a mismatched family is
//! caught before any arithmetic happens. [`RampMotion`] adds acceleration
//! and braking phases around a cruise at constant velocity.

use serde::{Deserialize, Serialize};

use physica_units::{standard, FamilyId, Quantity, Reduced};

use crate::error::MotionError;

pub(crate) fn expect_family(
    quantity: &Quantity,
    family: FamilyId,
    expected: &'static str,
) -> Result<(), MotionError> {
    if quantity.family() != family {
        return Err(MotionError::WrongFamily {
            expected,
            got: quantity.family_name().to_string(),
        });
    }
    Ok(())
}

fn expect_positive(
    quantity: &Quantity,
    family: FamilyId,
    name: &'static str,
) -> Result<(), MotionError> {
    expect_family(quantity, family, name)?;
    if quantity.value() <= 0.0 {
        return Err(MotionError::NonPositive(name));
    }
    Ok(())
}

/// Divide two quantities of distinct, association-linked families.
fn cross_divide(numerator: &Quantity, denominator: &Quantity) -> Result<Quantity, MotionError> {
    match numerator.try_div(denominator)? {
        Reduced::Quantity(quantity) => Ok(quantity),
        Reduced::Scalar(_) => unreachable!("operand families are distinct by construction"),
    }
}

/// Travel at constant velocity: a distance, the time it takes, and the
/// velocity tying the two together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformMotion {
    distance: Quantity,
    time: Quantity,
    velocity: Quantity,
}

impl UniformMotion {
    /// Derive the velocity from a distance covered in a given time.
    pub fn from_distance_time(distance: Quantity, time: Quantity) -> Result<Self, MotionError> {
        expect_family(&distance, standard::DISTANCE, "distance")?;
        expect_positive(&time, standard::TIME, "time")?;
        let velocity = cross_divide(&distance, &time)?;
        Ok(UniformMotion {
            distance,
            time,
            velocity,
        })
    }

    /// Derive the travel time from a distance at a given velocity.
    pub fn from_distance_velocity(
        distance: Quantity,
        velocity: Quantity,
    ) -> Result<Self, MotionError> {
        expect_family(&distance, standard::DISTANCE, "distance")?;
        expect_positive(&velocity, standard::VELOCITY, "velocity")?;
        let time = cross_divide(&distance, &velocity)?;
        Ok(UniformMotion {
            distance,
            time,
            velocity,
        })
    }

    /// Derive the distance covered at a velocity over a given time.
    pub fn from_velocity_time(velocity: Quantity, time: Quantity) -> Result<Self, MotionError> {
        expect_positive(&velocity, standard::VELOCITY, "velocity")?;
        expect_positive(&time, standard::TIME, "time")?;
        let distance = velocity.try_mul(&time)?;
        Ok(UniformMotion {
            distance,
            time,
            velocity,
        })
    }

    pub fn distance(&self) -> Quantity {
        self.distance
    }

    pub fn time(&self) -> Quantity {
        self.time
    }

    pub fn velocity(&self) -> Quantity {
        self.velocity
    }

    /// Chain two legs: distances and times add, the velocity becomes the
    /// overall mean.
    pub fn try_add(&self, other: &UniformMotion) -> Result<UniformMotion, MotionError> {
        let distance = self.distance.try_add(&other.distance)?;
        let time = self.time.try_add(&other.time)?;
        UniformMotion::from_distance_time(distance, time)
    }

    /// Remove a leg from the end of a journey.
    pub fn try_sub(&self, other: &UniformMotion) -> Result<UniformMotion, MotionError> {
        let distance = self.distance.try_sub(&other.distance)?;
        let time = self.time.try_sub(&other.time)?;
        UniformMotion::from_distance_time(distance, time)
    }

    /// Repeat the leg `factor` times; the velocity is unchanged.
    pub fn scale(&self, factor: f64) -> UniformMotion {
        UniformMotion {
            distance: self.distance * factor,
            time: self.time * factor,
            velocity: self.velocity,
        }
    }
}

/// Travel with an acceleration phase from rest, a cruise at constant
/// velocity and a braking phase back to rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampMotion {
    cruise_velocity: Quantity,
    acceleration: Quantity,
    braking: Quantity,
    ramp_up: UniformMotion,
    cruise: UniformMotion,
    ramp_down: UniformMotion,
}

/// Time and distance spent reaching `velocity` from rest at constant
/// `rate`, folded into a leg whose velocity is the phase mean (`v / 2`).
fn ramp_leg(velocity: &Quantity, rate: &Quantity) -> Result<UniformMotion, MotionError> {
    let time = cross_divide(velocity, rate)?;
    UniformMotion::from_velocity_time(*velocity * 0.5, time)
}

impl RampMotion {
    /// Plan the phases for a given total distance.
    pub fn with_distance(
        velocity: Quantity,
        acceleration: Quantity,
        braking: Quantity,
        total_distance: Quantity,
    ) -> Result<Self, MotionError> {
        expect_positive(&velocity, standard::VELOCITY, "velocity")?;
        expect_positive(&acceleration, standard::ACCELERATION, "acceleration")?;
        expect_positive(&braking, standard::ACCELERATION, "braking")?;
        expect_positive(&total_distance, standard::DISTANCE, "distance")?;

        let ramp_up = ramp_leg(&velocity, &acceleration)?;
        let ramp_down = ramp_leg(&velocity, &braking)?;
        let cruise_distance = total_distance
            .try_sub(&ramp_up.distance())?
            .try_sub(&ramp_down.distance())?;
        if cruise_distance.value() < 0.0 {
            return Err(MotionError::RampTooLong("distance"));
        }
        let cruise = UniformMotion::from_distance_velocity(cruise_distance, velocity)?;
        Ok(RampMotion {
            cruise_velocity: velocity,
            acceleration,
            braking,
            ramp_up,
            cruise,
            ramp_down,
        })
    }

    /// Plan the phases for a given total time.
    pub fn with_time(
        velocity: Quantity,
        acceleration: Quantity,
        braking: Quantity,
        total_time: Quantity,
    ) -> Result<Self, MotionError> {
        expect_positive(&velocity, standard::VELOCITY, "velocity")?;
        expect_positive(&acceleration, standard::ACCELERATION, "acceleration")?;
        expect_positive(&braking, standard::ACCELERATION, "braking")?;
        expect_positive(&total_time, standard::TIME, "time")?;

        let ramp_up = ramp_leg(&velocity, &acceleration)?;
        let ramp_down = ramp_leg(&velocity, &braking)?;
        let cruise_time = total_time.try_sub(&ramp_up.time())?.try_sub(&ramp_down.time())?;
        if cruise_time.value() < 0.0 {
            return Err(MotionError::RampTooLong("time"));
        }
        let cruise = UniformMotion::from_velocity_time(velocity, cruise_time)?;
        Ok(RampMotion {
            cruise_velocity: velocity,
            acceleration,
            braking,
            ramp_up,
            cruise,
            ramp_down,
        })
    }

    pub fn cruise_velocity(&self) -> Quantity {
        self.cruise_velocity
    }

    pub fn acceleration(&self) -> Quantity {
        self.acceleration
    }

    pub fn braking(&self) -> Quantity {
        self.braking
    }

    pub fn ramp_up(&self) -> &UniformMotion {
        &self.ramp_up
    }

    pub fn cruise(&self) -> &UniformMotion {
        &self.cruise
    }

    pub fn ramp_down(&self) -> &UniformMotion {
        &self.ramp_down
    }

    /// Total distance across the three phases.
    pub fn distance(&self) -> Quantity {
        self.ramp_up.distance() + self.cruise.distance().value() + self.ramp_down.distance().value()
    }

    /// Total time across the three phases.
    pub fn time(&self) -> Quantity {
        self.ramp_up.time() + self.cruise.time().value() + self.ramp_down.time().value()
    }

    /// Overall mean velocity, ramps included.
    pub fn mean_velocity(&self) -> Result<Quantity, MotionError> {
        cross_divide(&self.distance(), &self.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physica_units::standard::{acceleration, distance, mass, time, velocity};

    #[test]
    fn uniform_motion_from_any_two() {
        let by_dt = UniformMotion::from_distance_time(
            distance("km", 12.0).unwrap(),
            time("min", 10.0).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(by_dt.velocity().to("kph").unwrap(), 72.0, max_relative = 1e-12);

        let by_dv = UniformMotion::from_distance_velocity(
            distance("km", 12.0).unwrap(),
            velocity("kph", 72.0).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(by_dv.time().to("min").unwrap(), 10.0, max_relative = 1e-12);

        let by_vt = UniformMotion::from_velocity_time(
            velocity("kph", 72.0).unwrap(),
            time("min", 10.0).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(by_vt.distance().to("km").unwrap(), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn wrong_family_is_rejected_up_front() {
        let err = UniformMotion::from_distance_time(
            mass("kg", 1.0).unwrap(),
            time("s", 1.0).unwrap(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MotionError::WrongFamily {
                expected: "distance",
                got: "mass".to_string(),
            }
        );
    }

    #[test]
    fn zero_time_is_rejected() {
        let err = UniformMotion::from_distance_time(
            distance("m", 10.0).unwrap(),
            time("s", 0.0).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, MotionError::NonPositive("time"));
    }

    #[test]
    fn legs_chain_and_scale() {
        let a = UniformMotion::from_distance_time(
            distance("m", 100.0).unwrap(),
            time("s", 10.0).unwrap(),
        )
        .unwrap();
        let b = UniformMotion::from_distance_time(
            distance("m", 200.0).unwrap(),
            time("s", 20.0).unwrap(),
        )
        .unwrap();

        let both = a.try_add(&b).unwrap();
        assert_eq!(both.distance().value(), 300.0);
        assert_eq!(both.time().value(), 30.0);
        assert_eq!(both.velocity().value(), 10.0);

        let shorter = both.try_sub(&b).unwrap();
        assert_eq!(shorter.distance(), a.distance());

        let twice = a.scale(2.0);
        assert_eq!(twice.distance().value(), 200.0);
        assert_eq!(twice.velocity(), a.velocity());
    }

    #[test]
    fn ramp_motion_over_a_distance() {
        let ramp = RampMotion::with_distance(
            velocity("mps", 20.0).unwrap(),
            acceleration("mpss", 2.0).unwrap(),
            acceleration("mpss", 4.0).unwrap(),
            distance("m", 1000.0).unwrap(),
        )
        .unwrap();

        assert_eq!(ramp.ramp_up().time().value(), 10.0);
        assert_eq!(ramp.ramp_up().distance().value(), 100.0);
        assert_eq!(ramp.ramp_down().time().value(), 5.0);
        assert_eq!(ramp.ramp_down().distance().value(), 50.0);
        assert_eq!(ramp.cruise().distance().value(), 850.0);
        assert_relative_eq!(ramp.cruise().time().value(), 42.5, max_relative = 1e-12);

        assert_relative_eq!(ramp.distance().value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(ramp.time().value(), 57.5, max_relative = 1e-12);
        assert_relative_eq!(
            ramp.mean_velocity().unwrap().value(),
            1000.0 / 57.5,
            max_relative = 1e-12,
        );
    }

    #[test]
    fn ramp_motion_over_a_time() {
        let ramp = RampMotion::with_time(
            velocity("mps", 20.0).unwrap(),
            acceleration("mpss", 2.0).unwrap(),
            acceleration("mpss", 4.0).unwrap(),
            time("s", 60.0).unwrap(),
        )
        .unwrap();

        assert_relative_eq!(ramp.cruise().time().value(), 45.0, max_relative = 1e-12);
        assert_relative_eq!(ramp.distance().value(), 1050.0, max_relative = 1e-12);
    }

    #[test]
    fn ramp_that_does_not_fit() {
        let err = RampMotion::with_distance(
            velocity("mps", 20.0).unwrap(),
            acceleration("mpss", 2.0).unwrap(),
            acceleration("mpss", 4.0).unwrap(),
            distance("m", 120.0).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, MotionError::RampTooLong("distance"));
    }
}
