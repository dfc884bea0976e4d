//! Typed errors for registry population, conversion and arithmetic.
//!
//! Every error is a contract violation raised synchronously at the call
//! site; nothing is clamped, defaulted or retried.

use thiserror::Error;

/// Errors raised by the unit engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The unit key is absent from the family's conversion table.
    #[error("unknown unit `{unit}` for family `{family}`")]
    UnknownUnit { family: String, unit: String },

    /// The family name is absent from the registry.
    #[error("unknown family `{0}`")]
    UnknownFamily(String),

    /// A family with this name is already registered.
    #[error("family `{0}` is already registered")]
    DuplicateFamily(String),

    /// Arithmetic or ordering between families with no registered
    /// association.
    #[error("no defined arithmetic between `{left}` and `{right}`")]
    IncompatibleFamilies { left: String, right: String },

    /// Operation with no defined semantics for this family.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A process-wide registry is already installed.
    #[error("the global registry is already installed")]
    RegistryInstalled,

    /// A family id issued by a registry that was never installed.
    #[error("family id does not belong to the installed registry")]
    UnregisteredFamily,
}
