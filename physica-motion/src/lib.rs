//! Kinematics on top of `physica-units`: motions from any two of distance,
//! time and velocity, acceleration ramps, vehicle travel planning and
//! special-relativistic corrections.
//!
//! ```
//! use physica_motion::UniformMotion;
//! use physica_units::standard;
//!
//! let commute = UniformMotion::from_distance_time(
//!     standard::distance("km", 12.0)?,
//!     standard::time("min", 10.0)?,
//! )?;
//! assert!((commute.velocity().to("kph")? - 72.0).abs() < 1e-9);
//! # Ok::<(), physica_motion::MotionError>(())
//! ```

mod error;
mod motion;
pub mod relativity;
mod vehicle;

pub use error::MotionError;
pub use motion::{RampMotion, UniformMotion};
pub use vehicle::{Travel, Vehicle};
