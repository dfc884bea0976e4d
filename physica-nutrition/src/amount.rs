//! Nutrient amounts: a map from nutrient name to a mass quantity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use physica_units::{standard, Quantity};

use crate::error::NutritionError;

/// Per-nutrient masses, e.g. the composition of a food or the nutrients in
/// a serving. Missing nutrients mean "none", so amounts of different shapes
/// combine freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    nutrients: HashMap<String, Quantity>,
}

impl NutrientAmount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a nutrient. The amount must belong to the mass family.
    pub fn with(mut self, nutrient: &str, amount: Quantity) -> Result<Self, NutritionError> {
        if amount.family() != standard::MASS {
            return Err(NutritionError::NotAMass {
                nutrient: nutrient.to_string(),
                got: amount.family_name().to_string(),
            });
        }
        self.nutrients.insert(nutrient.to_string(), amount);
        Ok(self)
    }

    pub fn get(&self, nutrient: &str) -> Option<Quantity> {
        self.nutrients.get(nutrient).copied()
    }

    pub fn nutrients(&self) -> impl Iterator<Item = (&str, Quantity)> {
        self.nutrients
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.nutrients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nutrients.is_empty()
    }

    /// Scale every amount, e.g. from a per-100g composition to a serving.
    pub fn scale(&self, factor: f64) -> NutrientAmount {
        NutrientAmount {
            nutrients: self
                .nutrients
                .iter()
                .map(|(name, amount)| (name.clone(), *amount * factor))
                .collect(),
        }
    }

    /// Sum of two amounts, nutrient by nutrient.
    pub fn combine(&self, other: &NutrientAmount) -> Result<NutrientAmount, NutritionError> {
        let mut nutrients = self.nutrients.clone();
        for (name, amount) in &other.nutrients {
            let total = match nutrients.get(name) {
                Some(existing) => existing.try_add(amount)?,
                None => *amount,
            };
            nutrients.insert(name.clone(), total);
        }
        Ok(NutrientAmount { nutrients })
    }

    /// Fraction of a reference amount this amount provides for one
    /// nutrient. `None` when the reference does not track the nutrient;
    /// a zero-mass reference requires nothing and counts as fully covered.
    pub fn coverage(&self, reference: &NutrientAmount, nutrient: &str) -> Option<f64> {
        let target = reference.get(nutrient)?;
        if target.value() == 0.0 {
            return Some(1.0);
        }
        let amount = self
            .get(nutrient)
            .unwrap_or_else(|| Quantity::canonical(standard::MASS, 0.0));
        // Same family on both sides, so the ratio is a plain scalar.
        amount.try_div(&target).ok()?.scalar()
    }

    /// Whether every nutrient tracked by the reference is covered in full.
    pub fn satisfies(&self, reference: &NutrientAmount) -> bool {
        reference
            .nutrients()
            .all(|(name, _)| self.coverage(reference, name).is_some_and(|c| c >= 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use physica_units::standard::{distance, mass};

    fn snack() -> NutrientAmount {
        NutrientAmount::new()
            .with("iron", mass("mg", 7.0).unwrap())
            .unwrap()
            .with("zinc", mass("mg", 2.0).unwrap())
            .unwrap()
    }

    #[test]
    fn only_masses_are_accepted() {
        let err = NutrientAmount::new()
            .with("iron", distance("m", 1.0).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            NutritionError::NotAMass {
                nutrient: "iron".to_string(),
                got: "distance".to_string(),
            }
        );
    }

    #[test]
    fn scaling_a_serving() {
        let double = snack().scale(2.0);
        assert_eq!(double.get("iron").unwrap(), mass("mg", 14.0).unwrap());
        assert_eq!(double.get("zinc").unwrap(), mass("mg", 4.0).unwrap());
    }

    #[test]
    fn combining_meals() {
        let other = NutrientAmount::new()
            .with("iron", mass("mg", 7.0).unwrap())
            .unwrap()
            .with("calcium", mass("mg", 100.0).unwrap())
            .unwrap();
        let day = snack().combine(&other).unwrap();
        assert_eq!(day.get("iron").unwrap(), mass("mg", 14.0).unwrap());
        assert_eq!(day.get("zinc").unwrap(), mass("mg", 2.0).unwrap());
        assert_eq!(day.get("calcium").unwrap(), mass("mg", 100.0).unwrap());
    }

    #[test]
    fn coverage_is_a_plain_ratio() {
        let reference = NutrientAmount::new()
            .with("iron", mass("mg", 14.0).unwrap())
            .unwrap();
        let half = snack();
        assert_relative_eq!(
            half.coverage(&reference, "iron").unwrap(),
            0.5,
            max_relative = 1e-12,
        );
        // Untracked nutrients have no coverage; missing amounts cover 0%.
        assert_eq!(half.coverage(&reference, "zinc"), None);
        assert_eq!(
            NutrientAmount::new().coverage(&reference, "iron"),
            Some(0.0)
        );
    }

    #[test]
    fn a_zero_reference_is_always_covered() {
        let reference = NutrientAmount::new()
            .with("iron", mass("mg", 0.0).unwrap())
            .unwrap();
        assert_eq!(
            NutrientAmount::new().coverage(&reference, "iron"),
            Some(1.0)
        );
        assert_eq!(snack().coverage(&reference, "iron"), Some(1.0));
        assert!(NutrientAmount::new().satisfies(&reference));
    }

    #[test]
    fn satisfaction_requires_full_coverage() {
        let reference = NutrientAmount::new()
            .with("iron", mass("mg", 14.0).unwrap())
            .unwrap()
            .with("zinc", mass("mg", 2.0).unwrap())
            .unwrap();
        assert!(!snack().satisfies(&reference));
        assert!(snack().scale(2.0).satisfies(&reference));
    }
}
