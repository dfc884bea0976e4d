use physica_units::UnitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    /// Nutrient amounts are masses; any other family is rejected.
    #[error("nutrient `{nutrient}` must be a mass, got {got}")]
    NotAMass { nutrient: String, got: String },

    /// A body parameter carried a quantity of the wrong family.
    #[error("expected a {expected} quantity, got {got}")]
    WrongFamily {
        expected: &'static str,
        got: String,
    },

    /// A body parameter that must be strictly positive was zero or negative.
    #[error("{0} must be strictly positive")]
    NonPositive(&'static str),

    #[error(transparent)]
    Unit(#[from] UnitError),
}
