//! Nutrient bookkeeping on top of `physica-units`: amounts are mass
//! quantities keyed by nutrient name, compared against daily reference
//! intakes through plain same-family ratios.

mod amount;
mod body;
mod error;
pub mod reference;

pub use amount::NutrientAmount;
pub use body::{Body, BodyMassCategory};
pub use error::NutritionError;
