//! Family descriptors: display names, conversion table and the association
//! tables that drive cross-family arithmetic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::convert::Conversion;

/// Identity of a registered family: a dense index into the registry that
/// issued it. Only meaningful together with that registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(u32);

impl FamilyId {
    pub(crate) const fn new(index: u32) -> Self {
        FamilyId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Builder-side description of a family. Associations reference other
/// families by name; they are resolved to [`FamilyId`]s when the registry is
/// built, so a dangling name fails at build time rather than at first use.
#[derive(Debug, Clone)]
pub struct FamilyDef {
    pub(crate) name: String,
    pub(crate) singular: String,
    pub(crate) plural: String,
    pub(crate) units: Vec<(String, Conversion)>,
    pub(crate) multiply: Vec<(String, String)>,
    pub(crate) divide: Vec<(String, String)>,
    pub(crate) inverse: Option<String>,
}

impl FamilyDef {
    pub fn new(name: &str, singular: &str, plural: &str) -> Self {
        FamilyDef {
            name: name.to_string(),
            singular: singular.to_string(),
            plural: plural.to_string(),
            units: Vec::new(),
            multiply: Vec::new(),
            divide: Vec::new(),
            inverse: None,
        }
    }

    /// Add a named unit with a linear factor to the canonical unit
    /// (`canonical = factor * value`).
    pub fn unit(mut self, key: &str, factor: f64) -> Self {
        self.units.push((key.to_string(), Conversion::Linear(factor)));
        self
    }

    /// Add a named unit with an explicit forward/inverse pair.
    pub fn unit_affine(mut self, key: &str, forward: fn(f64) -> f64, inverse: fn(f64) -> f64) -> Self {
        self.units.push((key.to_string(), Conversion::Affine { forward, inverse }));
        self
    }

    /// Declare `self × other → result`.
    pub fn mul(mut self, other: &str, result: &str) -> Self {
        self.multiply.push((other.to_string(), result.to_string()));
        self
    }

    /// Declare `self ÷ other → result`.
    pub fn div(mut self, other: &str, result: &str) -> Self {
        self.divide.push((other.to_string(), result.to_string()));
        self
    }

    /// Declare the family produced by `scalar / self`.
    pub fn inverse(mut self, family: &str) -> Self {
        self.inverse = Some(family.to_string());
        self
    }
}

/// A family as stored in a sealed registry: every association resolved to a
/// [`FamilyId`].
#[derive(Debug, Clone)]
pub struct Family {
    pub(crate) name: String,
    pub(crate) singular: String,
    pub(crate) plural: String,
    pub(crate) conversions: HashMap<String, Conversion>,
    pub(crate) multiply: HashMap<FamilyId, FamilyId>,
    pub(crate) divide: HashMap<FamilyId, FamilyId>,
    pub(crate) inverse: Option<FamilyId>,
}

impl Family {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Conversion rule for a named unit, if registered.
    pub fn conversion(&self, unit: &str) -> Option<&Conversion> {
        self.conversions.get(unit)
    }

    /// All registered units of this family.
    pub fn units(&self) -> impl Iterator<Item = (&str, &Conversion)> {
        self.conversions.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    /// Family produced by multiplying with a quantity of `other`.
    pub fn multiplies_with(&self, other: FamilyId) -> Option<FamilyId> {
        self.multiply.get(&other).copied()
    }

    /// Family produced by dividing by a quantity of `other`.
    pub fn divides_by(&self, other: FamilyId) -> Option<FamilyId> {
        self.divide.get(&other).copied()
    }

    /// All multiply associations, for registry-wide consistency checks.
    pub fn multiply_table(&self) -> impl Iterator<Item = (FamilyId, FamilyId)> + '_ {
        self.multiply.iter().map(|(other, result)| (*other, *result))
    }

    /// Family produced by `scalar / quantity`, if any.
    pub fn inverse(&self) -> Option<FamilyId> {
        self.inverse
    }

    /// The unit stored as-is, i.e. the one with an identity rule.
    pub fn canonical_unit(&self) -> Option<&str> {
        self.conversions
            .iter()
            .find(|(_, rule)| rule.is_identity())
            .map(|(key, _)| key.as_str())
    }
}
