//! Physical constants as ready-made quantities (2010 CODATA values).

use std::sync::LazyLock;

use crate::quantity::Quantity;
use crate::standard::{ACCELERATION, DISTANCE, MASS, TIME, VELOCITY};

/// Speed of light in vacuum.
pub static SPEED_OF_LIGHT: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(VELOCITY, 299_792_458.0));

/// Standard gravity at the Earth's surface.
pub static EARTH_GRAVITY: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(ACCELERATION, 9.80665));

/// Unified atomic mass unit.
pub static ATOMIC_MASS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(MASS, 1.660_538_921e-27));

pub static ELECTRON_MASS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(MASS, 9.109_382_91e-31));

pub static PROTON_MASS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(MASS, 1.672_621_777e-27));

pub static NEUTRON_MASS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(MASS, 1.674_927_351e-27));

pub static PLANCK_LENGTH: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(DISTANCE, 1.616_199e-35));

pub static PLANCK_TIME: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(TIME, 5.391_06e-44));

pub static PLANCK_MASS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(MASS, 2.176_51e-8));

pub static BOHR_RADIUS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(DISTANCE, 5.291_772_109_2e-11));

/// Classical electron radius.
pub static ELECTRON_RADIUS: LazyLock<Quantity> =
    LazyLock::new(|| Quantity::canonical(DISTANCE, 2.817_940_326_7e-15));
