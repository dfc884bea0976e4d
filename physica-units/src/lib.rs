//! Dynamic dimensional analysis: quantities tagged with a unit family,
//! converted through per-family tables and combined through registered
//! associations.
//!
//! A family groups the units of one physical dimension (distance, time,
//! mass, ...) around a canonical unit. Quantities store their value in that
//! canonical unit; arithmetic between families is driven entirely by the
//! multiply/divide/inverse tables of the process-wide [`Registry`], so
//! `mass × acceleration` yields a force without any hard-coded rule in the
//! dispatcher.
//!
//! The [`standard`] module ships families for mechanics, geometry, heat,
//! light and electricity. Custom families (a currency family with rates
//! fetched at startup, say) extend [`standard::builder`] and install the
//! result before first use.
//!
//! ```
//! use physica_units::standard;
//!
//! let m = standard::mass("kg", 2.0)?;
//! let a = standard::acceleration("mpss", 3.0)?;
//! let f = m.try_mul(&a)?;
//! assert_eq!(f.to("n")?, 6.0);
//! # Ok::<(), physica_units::UnitError>(())
//! ```

pub mod constants;
mod convert;
mod error;
mod family;
mod quantity;
mod registry;
pub mod standard;

pub use convert::Conversion;
pub use error::UnitError;
pub use family::{Family, FamilyDef, FamilyId};
pub use quantity::{Quantity, Reduced};
pub use registry::{Registry, RegistryBuilder};
