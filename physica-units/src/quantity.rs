//! Quantity values and the arithmetic dispatcher.
//!
//! A [`Quantity`] stores a float in its family's canonical unit plus the
//! family identity. No operator here knows anything about a specific family;
//! everything routes through the descriptor and association tables of the
//! operands.
//!
//! Fallible arithmetic between quantities uses inherent `try_*` methods
//! returning `Result`; the std operator traits are implemented only where
//! the operation cannot fail (scalar scaling, scalar add/sub, negation).
//! The two must not overlap: an inherent `add` would lose method resolution
//! to `Add<f64>::add` on an owned receiver.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::convert::Conversion;
use crate::error::UnitError;
use crate::family::{Family, FamilyId};
use crate::registry::Registry;

/// A numeric value tagged with its unit family, stored in the canonical
/// unit. Immutable; every operation returns a new value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    family: FamilyId,
}

/// Outcome of an operation that may collapse to a dimensionless number:
/// same-family division and the zeroth power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduced {
    Scalar(f64),
    Quantity(Quantity),
}

impl Reduced {
    pub fn scalar(self) -> Option<f64> {
        match self {
            Reduced::Scalar(value) => Some(value),
            Reduced::Quantity(_) => None,
        }
    }

    pub fn quantity(self) -> Option<Quantity> {
        match self {
            Reduced::Scalar(_) => None,
            Reduced::Quantity(quantity) => Some(quantity),
        }
    }
}

impl Quantity {
    /// Build a quantity from a named unit of `family`.
    pub fn of(family: FamilyId, unit: &str, value: f64) -> Result<Quantity, UnitError> {
        let descriptor = Registry::global()
            .family(family)
            .ok_or(UnitError::UnregisteredFamily)?;
        let rule = descriptor
            .conversion(unit)
            .ok_or_else(|| UnitError::UnknownUnit {
                family: descriptor.name().to_string(),
                unit: unit.to_string(),
            })?;
        Ok(Quantity {
            value: rule.to_canonical(value),
            family,
        })
    }

    /// Build a quantity directly from a canonical-unit value.
    pub fn canonical(family: FamilyId, value: f64) -> Quantity {
        Quantity { value, family }
    }

    /// Extract the value expressed in a named unit of the family.
    pub fn to(&self, unit: &str) -> Result<f64, UnitError> {
        let descriptor = self.descriptor()?;
        let rule = descriptor
            .conversion(unit)
            .ok_or_else(|| UnitError::UnknownUnit {
                family: descriptor.name().to_string(),
                unit: unit.to_string(),
            })?;
        Ok(rule.from_canonical(self.value))
    }

    /// Canonical-unit value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn family(&self) -> FamilyId {
        self.family
    }

    /// Name of the family, or a placeholder when the id does not belong to
    /// the installed registry.
    pub fn family_name(&self) -> &'static str {
        Registry::global()
            .family(self.family)
            .map(Family::name)
            .unwrap_or("unregistered family")
    }

    fn descriptor(&self) -> Result<&'static Family, UnitError> {
        Registry::global()
            .family(self.family)
            .ok_or(UnitError::UnregisteredFamily)
    }

    fn incompatible(&self, other: &Quantity) -> UnitError {
        UnitError::IncompatibleFamilies {
            left: self.family_name().to_string(),
            right: other.family_name().to_string(),
        }
    }

    /// Sum of two quantities of the same family.
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        if self.family != other.family {
            return Err(self.incompatible(other));
        }
        Ok(Quantity::canonical(self.family, self.value + other.value))
    }

    /// Difference of two quantities of the same family.
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        if self.family != other.family {
            return Err(self.incompatible(other));
        }
        Ok(Quantity::canonical(self.family, self.value - other.value))
    }

    /// Product through the family's multiply table.
    pub fn try_mul(&self, other: &Quantity) -> Result<Quantity, UnitError> {
        let result = self
            .descriptor()?
            .multiplies_with(other.family)
            .ok_or_else(|| self.incompatible(other))?;
        Ok(Quantity::canonical(result, self.value * other.value))
    }

    /// Quotient: a plain ratio inside one family, a divide-table lookup
    /// across two.
    pub fn try_div(&self, other: &Quantity) -> Result<Reduced, UnitError> {
        if self.family == other.family {
            return Ok(Reduced::Scalar(self.value / other.value));
        }
        let result = self
            .descriptor()?
            .divides_by(other.family)
            .ok_or_else(|| self.incompatible(other))?;
        Ok(Reduced::Quantity(Quantity::canonical(
            result,
            self.value / other.value,
        )))
    }

    /// [`try_div`](Quantity::try_div) with the result floored.
    pub fn floor_div(&self, other: &Quantity) -> Result<Reduced, UnitError> {
        Ok(match self.try_div(other)? {
            Reduced::Scalar(ratio) => Reduced::Scalar(ratio.floor()),
            Reduced::Quantity(quantity) => Reduced::Quantity(quantity.floor()),
        })
    }

    /// Reciprocal (`1 / self`). Defined only when the family declares an
    /// inverse family; `scalar / q` is `q.recip()? * scalar`.
    pub fn recip(&self) -> Result<Quantity, UnitError> {
        let inverse = self.descriptor()?.inverse().ok_or_else(|| {
            UnitError::Unsupported(format!(
                "family `{}` has no inverse family",
                self.family_name()
            ))
        })?;
        Ok(Quantity::canonical(inverse, 1.0 / self.value))
    }

    /// Integer power. Zero collapses to the dimensionless 1, positive powers
    /// walk the multiply table, negative powers go through the reciprocal.
    pub fn pow(&self, exp: i32) -> Result<Reduced, UnitError> {
        if exp == 0 {
            return Ok(Reduced::Scalar(1.0));
        }
        let (base, n) = if exp > 0 {
            (*self, exp as i64)
        } else {
            (self.recip()?, -(exp as i64))
        };
        let mut acc = base;
        for _ in 1..n {
            acc = acc.try_mul(&base)?;
        }
        Ok(Reduced::Quantity(acc))
    }

    /// Magnitude, family preserved.
    pub fn abs(&self) -> Quantity {
        Quantity::canonical(self.family, self.value.abs())
    }

    /// Canonical value floored. Scalar floor-division is `(q / k).floor()`.
    pub fn floor(&self) -> Quantity {
        Quantity::canonical(self.family, self.value.floor())
    }

    /// Ordering against another quantity of the same family. Ordering across
    /// families has no defined result and errors.
    pub fn try_cmp(&self, other: &Quantity) -> Result<Ordering, UnitError> {
        if self.family != other.family {
            return Err(self.incompatible(other));
        }
        self.value
            .partial_cmp(&other.value)
            .ok_or_else(|| UnitError::Unsupported("comparison with NaN".to_string()))
    }

    /// Single best-fit display pick: the linear unit that keeps the
    /// magnitude in `[1, 1000)`, smallest such magnitude winning. Falls back
    /// to the canonical unit.
    pub fn best_unit(&self) -> Result<(&'static str, f64), UnitError> {
        let descriptor = self.descriptor()?;
        let mut best: Option<(&'static str, f64)> = None;
        for (key, rule) in descriptor.units() {
            if !matches!(rule, Conversion::Linear(_)) {
                continue;
            }
            let converted = rule.from_canonical(self.value);
            let magnitude = converted.abs();
            if !(1.0..1000.0).contains(&magnitude) {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, current)) => magnitude < current.abs(),
            };
            if better {
                best = Some((key, converted));
            }
        }
        Ok(best.unwrap_or_else(|| {
            let key = descriptor.canonical_unit().unwrap_or(descriptor.name());
            (key, self.value)
        }))
    }
}

impl Add<f64> for Quantity {
    type Output = Quantity;

    fn add(self, rhs: f64) -> Quantity {
        Quantity::canonical(self.family, self.value + rhs)
    }
}

impl Add<Quantity> for f64 {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        rhs + self
    }
}

impl Sub<f64> for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: f64) -> Quantity {
        Quantity::canonical(self.family, self.value - rhs)
    }
}

impl Sub<Quantity> for f64 {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity::canonical(rhs.family, self - rhs.value)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::canonical(self.family, self.value * rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::canonical(self.family, self.value / rhs)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::canonical(self.family, -self.value)
    }
}

impl PartialEq for Quantity {
    /// Same-family quantities compare canonical values; quantities of
    /// different families are simply never equal.
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.value == other.value
    }
}

impl PartialOrd for Quantity {
    /// No ordering is defined across families; [`Quantity::try_cmp`]
    /// surfaces the mismatch as an error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.family != other.family {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Registry::global().family(self.family) {
            Some(descriptor) => {
                let noun = if self.value == 1.0 {
                    descriptor.singular()
                } else {
                    descriptor.plural()
                };
                write!(f, "{} {}", self.value, noun)
            }
            None => write!(f, "{} (unregistered family)", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::FamilyDef;
    use crate::standard;
    use approx::assert_relative_eq;

    #[test]
    fn construction_and_extraction() {
        let d = standard::distance("km", 1.0).unwrap();
        assert_eq!(d.value(), 1000.0);
        assert_eq!(d.to("m").unwrap(), 1000.0);
        assert_eq!(d.family(), standard::DISTANCE);
    }

    #[test]
    fn unknown_unit() {
        assert_eq!(
            standard::distance("furlong", 1.0),
            Err(UnitError::UnknownUnit {
                family: "distance".to_string(),
                unit: "furlong".to_string(),
            })
        );
        let d = standard::distance("m", 1.0).unwrap();
        assert!(matches!(d.to("furlong"), Err(UnitError::UnknownUnit { .. })));
    }

    #[test]
    fn add_sub_same_family() {
        let a = standard::distance("m", 300.0).unwrap();
        let b = standard::distance("km", 0.7).unwrap();
        assert_eq!(a.try_add(&b).unwrap().value(), 1000.0);
        assert_eq!(b.try_sub(&a).unwrap().value(), 400.0);
    }

    #[test]
    fn add_across_families_errors() {
        let d = standard::distance("m", 4.0).unwrap();
        let m = standard::mass("kg", 1.0).unwrap();
        assert_eq!(
            d.try_add(&m),
            Err(UnitError::IncompatibleFamilies {
                left: "distance".to_string(),
                right: "mass".to_string(),
            })
        );
        assert!(d.try_sub(&m).is_err());
    }

    #[test]
    fn scalar_add_and_sub() {
        let d = standard::distance("m", 5.0).unwrap();
        assert_eq!((d + 4.0).value(), 9.0);
        assert_eq!((4.0 + d).value(), 9.0);
        assert_eq!((d - 4.0).value(), 1.0);
        assert_eq!((9.0 - d).value(), 4.0);
    }

    #[test]
    fn scalar_multiply_commutes() {
        let d = standard::distance("m", 5.0).unwrap();
        assert_eq!(d * 2.0, 2.0 * d);
        assert_eq!((d * 2.0).value(), 10.0);
        assert_eq!((d / 2.0).value(), 2.5);
        assert_eq!((d / 2.0).floor().value(), 2.0);
    }

    #[test]
    fn scalar_operators_and_fallible_methods_coexist() {
        // Both resolve on an owned receiver without shadowing each other:
        // `*`/`/` take a bare f64, `try_mul`/`try_div` take a quantity.
        let d = standard::distance("m", 6.0).unwrap();
        let t = standard::time("s", 2.0).unwrap();
        let v = (d * 0.5).try_div(&t).unwrap().quantity().unwrap();
        assert_eq!(v.family(), standard::VELOCITY);
        assert_eq!(v.value(), 1.5);
        let back = (2.0 * v).try_mul(&t).unwrap();
        assert_eq!(back.value(), 6.0);
    }

    #[test]
    fn multiply_table_dispatch() {
        let m = standard::mass("kg", 2.0).unwrap();
        let a = standard::acceleration("mpss", 3.0).unwrap();
        let f = m.try_mul(&a).unwrap();
        assert_eq!(f.family(), standard::FORCE);
        assert_eq!(f.to("n").unwrap(), 6.0);
        // Reflected registration makes the product commutative.
        assert_eq!(a.try_mul(&m).unwrap(), f);
    }

    #[test]
    fn multiply_without_association_errors() {
        let m = standard::mass("kg", 2.0).unwrap();
        let t = standard::temperature("k", 300.0).unwrap();
        assert!(matches!(
            m.try_mul(&t),
            Err(UnitError::IncompatibleFamilies { .. })
        ));
    }

    #[test]
    fn same_family_division_is_a_ratio() {
        let a = standard::distance("m", 7.5).unwrap();
        let b = standard::distance("m", 2.5).unwrap();
        assert_eq!(a.try_div(&b).unwrap(), Reduced::Scalar(3.0));
        assert_eq!(
            a.floor_div(&standard::distance("m", 2.0).unwrap()).unwrap(),
            Reduced::Scalar(3.0)
        );
    }

    #[test]
    fn cross_family_division_dispatches() {
        let f = standard::force("n", 10.0).unwrap();
        let m = standard::mass("kg", 2.0).unwrap();
        let a = f.try_div(&m).unwrap().quantity().unwrap();
        assert_eq!(a.family(), standard::ACCELERATION);
        assert_eq!(a.to("mpss").unwrap(), 5.0);
    }

    #[test]
    fn floor_division_floors_the_quantity() {
        let d = standard::distance("m", 7.0).unwrap();
        let t = standard::time("s", 2.0).unwrap();
        let v = d.floor_div(&t).unwrap().quantity().unwrap();
        assert_eq!(v.family(), standard::VELOCITY);
        assert_eq!(v.value(), 3.0);
    }

    #[test]
    fn reciprocal_through_inverse_family() {
        let t = standard::time("s", 2.0).unwrap();
        let f = t.recip().unwrap();
        assert_eq!(f.family(), standard::FREQUENCY);
        assert_eq!(f.to("hz").unwrap(), 0.5);
        // And back: frequency declares time as its inverse.
        assert_eq!(f.recip().unwrap().to("s").unwrap(), 2.0);
    }

    #[test]
    fn reciprocal_without_inverse_errors() {
        let m = standard::mass("kg", 2.0).unwrap();
        assert!(matches!(m.recip(), Err(UnitError::Unsupported(_))));
    }

    #[test]
    fn integer_powers() {
        let d = standard::distance("m", 3.0).unwrap();
        assert_eq!(d.pow(0).unwrap(), Reduced::Scalar(1.0));
        assert_eq!(d.pow(1).unwrap().quantity().unwrap(), d);

        let area = d.pow(2).unwrap().quantity().unwrap();
        assert_eq!(area.family(), standard::AREA);
        assert_eq!(area.value(), 9.0);

        let volume = d.pow(3).unwrap().quantity().unwrap();
        assert_eq!(volume.family(), standard::VOLUME);
        assert_eq!(volume.value(), 27.0);

        let t = standard::time("s", 2.0).unwrap();
        let f = t.pow(-1).unwrap().quantity().unwrap();
        assert_eq!(f.family(), standard::FREQUENCY);
        assert_eq!(f.value(), 0.5);
    }

    #[test]
    fn negative_power_needs_inverse() {
        let m = standard::mass("kg", 2.0).unwrap();
        assert!(m.pow(-2).is_err());
    }

    #[test]
    fn neg_and_abs() {
        let d = standard::distance("m", -4.0).unwrap();
        assert_eq!((-d).value(), 4.0);
        assert_eq!(d.abs().value(), 4.0);
        assert_eq!(d.abs().family(), standard::DISTANCE);
    }

    #[test]
    fn equality_policy() {
        let a = standard::distance("km", 1.0).unwrap();
        let b = standard::distance("m", 1000.0).unwrap();
        let m = standard::mass("kg", 1000.0).unwrap();
        assert_eq!(a, b);
        // Cross-family equality is simply "not equal", never an error.
        assert_ne!(a, m);
    }

    #[test]
    fn ordering_policy() {
        let a = standard::distance("m", 1.0).unwrap();
        let b = standard::distance("m", 2.0).unwrap();
        let m = standard::mass("kg", 1.0).unwrap();
        assert!(a < b);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(a.partial_cmp(&m), None);
        assert!(matches!(
            a.try_cmp(&m),
            Err(UnitError::IncompatibleFamilies { .. })
        ));
    }

    #[test]
    fn display_uses_family_nouns() {
        let one = standard::distance("m", 1.0).unwrap();
        let many = standard::distance("m", 2.5).unwrap();
        assert_eq!(one.to_string(), "1 meter");
        assert_eq!(many.to_string(), "2.5 meters");
    }

    #[test]
    fn best_unit_picks_a_readable_magnitude() {
        let d = standard::distance("m", 1500.0).unwrap();
        let (unit, value) = d.best_unit().unwrap();
        assert_eq!(unit, "km");
        assert_relative_eq!(value, 1.5, max_relative = 1e-9);

        let small = standard::distance("m", 0.5).unwrap();
        let (unit, _) = small.best_unit().unwrap();
        // 0.5 m reads best in feet (~1.64).
        assert_eq!(unit, "ft");

        let zero = standard::distance("m", 0.0).unwrap();
        assert_eq!(zero.best_unit().unwrap(), ("m", 0.0));
    }

    #[test]
    fn ids_from_an_uninstalled_registry_are_rejected() {
        // Register an extra family but never install the result; its id is
        // out of range for the standard set the process actually runs on.
        let mut builder = standard::builder();
        let foreign = builder
            .register(FamilyDef::new("gadget", "gadget", "gadgets").unit("g", 1.0))
            .unwrap();
        drop(builder);

        assert!(Registry::global().family(foreign).is_none());
        let q = Quantity::canonical(foreign, 1.0);
        assert_eq!(q.to("g"), Err(UnitError::UnregisteredFamily));
        assert_eq!(
            Quantity::of(foreign, "g", 1.0),
            Err(UnitError::UnregisteredFamily)
        );
        assert_eq!(q.family_name(), "unregistered family");
        assert_eq!(q.to_string(), "1 (unregistered family)");
    }
}
