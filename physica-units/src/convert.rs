//! Conversion rules between a named unit and its family's canonical unit.

/// How a named unit maps to the family's canonical unit.
///
/// `Linear(factor)` means `canonical = factor * value`. `Affine` carries an
/// explicit forward/inverse pair for units that need an offset on top of a
/// scale (Celsius, Fahrenheit). The pair must satisfy
/// `inverse(forward(x)) == x` for all finite `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Linear(f64),
    Affine {
        forward: fn(f64) -> f64,
        inverse: fn(f64) -> f64,
    },
}

impl Conversion {
    /// The rule of a family's canonical unit.
    pub const IDENTITY: Conversion = Conversion::Linear(1.0);

    /// Express a raw unit value in the canonical unit.
    pub fn to_canonical(&self, value: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => factor * value,
            Conversion::Affine { forward, .. } => forward(value),
        }
    }

    /// Express a canonical value in this unit.
    pub fn from_canonical(&self, canonical: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => canonical / factor,
            Conversion::Affine { inverse, .. } => inverse(canonical),
        }
    }

    /// Whether this rule maps the unit onto the canonical unit unchanged.
    pub fn is_identity(&self) -> bool {
        matches!(self, Conversion::Linear(factor) if *factor == 1.0)
    }
}
