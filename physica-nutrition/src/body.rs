//! Body measurements and the mass index derived from them.

use serde::{Deserialize, Serialize};

use physica_units::{standard, Quantity};

use crate::error::NutritionError;

/// WHO body-mass-index bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyMassCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// A body described by its mass and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    mass: Quantity,
    height: Quantity,
}

impl Body {
    pub fn new(mass: Quantity, height: Quantity) -> Result<Self, NutritionError> {
        if mass.family() != standard::MASS {
            return Err(NutritionError::WrongFamily {
                expected: "mass",
                got: mass.family_name().to_string(),
            });
        }
        if height.family() != standard::DISTANCE {
            return Err(NutritionError::WrongFamily {
                expected: "distance",
                got: height.family_name().to_string(),
            });
        }
        if mass.value() <= 0.0 {
            return Err(NutritionError::NonPositive("mass"));
        }
        if height.value() <= 0.0 {
            return Err(NutritionError::NonPositive("height"));
        }
        Ok(Body { mass, height })
    }

    pub fn mass(&self) -> Quantity {
        self.mass
    }

    pub fn height(&self) -> Quantity {
        self.height
    }

    /// Body mass index in kg/m², mass over the square of the height.
    pub fn mass_index(&self) -> f64 {
        self.mass.value() / (self.height.value() * self.height.value())
    }

    pub fn category(&self) -> BodyMassCategory {
        let bmi = self.mass_index();
        if bmi < 18.5 {
            BodyMassCategory::Underweight
        } else if bmi < 25.0 {
            BodyMassCategory::Normal
        } else if bmi < 30.0 {
            BodyMassCategory::Overweight
        } else {
            BodyMassCategory::Obese
        }
    }
}
