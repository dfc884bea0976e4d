//! The standard family set: mechanics, geometry, heat, light and
//! electricity, with their conversion factors and association tables.
//!
//! Family ids below match the registration order in [`builder`]; a test
//! checks the two against each other. Multiplication associations are
//! registered in both directions so the product commutes.

use std::f64::consts::PI;

use crate::error::UnitError;
use crate::family::{FamilyDef, FamilyId};
use crate::quantity::Quantity;
use crate::registry::RegistryBuilder;

pub const DISTANCE: FamilyId = FamilyId::new(0);
pub const TIME: FamilyId = FamilyId::new(1);
pub const VELOCITY: FamilyId = FamilyId::new(2);
pub const ACCELERATION: FamilyId = FamilyId::new(3);
pub const MASS: FamilyId = FamilyId::new(4);
pub const FORCE: FamilyId = FamilyId::new(5);
pub const AREA: FamilyId = FamilyId::new(6);
pub const VOLUME: FamilyId = FamilyId::new(7);
pub const ENERGY: FamilyId = FamilyId::new(8);
pub const POWER: FamilyId = FamilyId::new(9);
pub const FREQUENCY: FamilyId = FamilyId::new(10);
pub const FLOW: FamilyId = FamilyId::new(11);
pub const MOMENTUM: FamilyId = FamilyId::new(12);
pub const PRESSURE: FamilyId = FamilyId::new(13);
pub const CHEMICAL_AMOUNT: FamilyId = FamilyId::new(14);
pub const TEMPERATURE: FamilyId = FamilyId::new(15);
pub const ANGLE: FamilyId = FamilyId::new(16);
pub const ANGULAR_VELOCITY: FamilyId = FamilyId::new(17);
pub const LIGHT_INTENSITY: FamilyId = FamilyId::new(18);
pub const LIGHT_FLOW: FamilyId = FamilyId::new(19);
pub const ILLUMINANCE: FamilyId = FamilyId::new(20);
pub const MAGNETIC_FIELD: FamilyId = FamilyId::new(21);
pub const CURRENT: FamilyId = FamilyId::new(22);
pub const CHARGE: FamilyId = FamilyId::new(23);
pub const VOLTAGE: FamilyId = FamilyId::new(24);
pub const RESISTANCE: FamilyId = FamilyId::new(25);
pub const CAPACITY: FamilyId = FamilyId::new(26);

// Conversion constants, all toward the canonical unit.
pub const AU_M: f64 = 149_597_870_700.0;
pub const LY_M: f64 = 9_460_730_472_580_800.0;
pub const IN_M: f64 = 25.4e-3;
pub const FT_M: f64 = 0.3048;
pub const YD_M: f64 = 0.9144;
pub const MI_M: f64 = 1.609_344e3;
pub const MIN_S: f64 = 60.0;
pub const H_S: f64 = 3600.0;
pub const D_S: f64 = 86_400.0;
pub const KPH_MPS: f64 = 1.0 / 3.6;
pub const MPH_MPS: f64 = MI_M / 3600.0;
pub const G_MPSS: f64 = 9.80665;
// Avoirdupois definitions.
pub const LB_KG: f64 = 0.453_592_37;
pub const OZ_KG: f64 = LB_KG / 16.0;
pub const DR_KG: f64 = LB_KG / 256.0;
pub const GR_KG: f64 = LB_KG / 7000.0;
pub const DYN_N: f64 = 1e-5;
pub const KGF_N: f64 = 9.80665;
pub const LBF_N: f64 = 4.448_222;
pub const PDL_N: f64 = 0.138_255;
pub const ACRE_M2: f64 = 4046.86;
pub const ARPENT_M2: f64 = 3418.89;
pub const HA_M2: f64 = 1e4;
pub const L_M3: f64 = 1e-3;
pub const KWH_J: f64 = 3.6e6;
pub const KGM_J: f64 = 9.80665;
// CIPM definition of the calorie.
pub const CAL_J: f64 = 4.1868;
pub const EV_J: f64 = 1.602_176_565e-19;
pub const CH_W: f64 = 735.49875;
pub const HP_W: f64 = 745.699_872;
pub const BAR_PA: f64 = 1e5;
pub const C_K: f64 = 273.15;
pub const DEG_RAD: f64 = PI / 180.0;
pub const GON_RAD: f64 = PI / 200.0;
pub const RPM_RADS: f64 = MIN_S / (2.0 * PI);
pub const PHOT_LX: f64 = 1e4;
pub const NOX_LX: f64 = 1e-3;
pub const GAMMA_T: f64 = 1e-9;
pub const G_T: f64 = 1e-4;

fn celsius_to_kelvin(c: f64) -> f64 {
    c + C_K
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - C_K
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0 + C_K
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    (k - C_K) * 9.0 / 5.0 + 32.0
}

/// A builder preloaded with the standard families. Extend it with custom
/// families (e.g. a currency family populated at startup) before building
/// and installing.
pub fn builder() -> RegistryBuilder {
    let mut builder = RegistryBuilder::new();
    for def in definitions() {
        builder
            .register(def)
            .expect("standard family names are unique");
    }
    builder
}

fn definitions() -> Vec<FamilyDef> {
    vec![
        FamilyDef::new("distance", "meter", "meters")
            .unit("nm", 1e-9)
            .unit("m", 1.0)
            .unit("km", 1e3)
            .unit("au", AU_M)
            .unit("ly", LY_M)
            .unit("inch", IN_M)
            .unit("ft", FT_M)
            .unit("yd", YD_M)
            .unit("mi", MI_M)
            .mul("distance", "area")
            .mul("area", "volume")
            .mul("force", "energy")
            .mul("frequency", "velocity")
            .div("time", "velocity")
            .div("velocity", "time"),
        FamilyDef::new("time", "second", "seconds")
            .unit("s", 1.0)
            .unit("m", MIN_S)
            .unit("min", MIN_S)
            .unit("h", H_S)
            .unit("d", D_S)
            .mul("velocity", "distance")
            .mul("acceleration", "velocity")
            .mul("current", "charge")
            .mul("angular velocity", "angle")
            .mul("force", "momentum")
            .mul("power", "energy")
            .mul("flow", "volume")
            .div("resistance", "capacity")
            .div("capacity", "resistance")
            .inverse("frequency"),
        FamilyDef::new("velocity", "meter per second", "meters per second")
            .unit("mps", 1.0)
            .unit("kph", KPH_MPS)
            .unit("mph", MPH_MPS)
            .mul("time", "distance")
            .mul("mass", "momentum")
            .mul("frequency", "acceleration")
            .div("time", "acceleration")
            .div("acceleration", "time")
            .div("frequency", "distance"),
        FamilyDef::new("acceleration", "meter per second squared", "meters per second squared")
            .unit("mpss", 1.0)
            .unit("kphs", KPH_MPS)
            .unit("g", G_MPSS)
            .mul("time", "velocity")
            .mul("mass", "force")
            .div("frequency", "velocity"),
        FamilyDef::new("mass", "kilogram", "kilograms")
            .unit("t", 1e3)
            .unit("kg", 1.0)
            .unit("g", 1e-3)
            .unit("mg", 1e-6)
            .unit("ug", 1e-9)
            .unit("lb", LB_KG)
            .unit("oz", OZ_KG)
            .unit("dr", DR_KG)
            .unit("gr", GR_KG)
            .mul("acceleration", "force")
            .mul("velocity", "momentum"),
        FamilyDef::new("force", "newton", "newtons")
            .unit("n", 1.0)
            .unit("dyn", DYN_N)
            .unit("kgf", KGF_N)
            .unit("lbf", LBF_N)
            .unit("pdl", PDL_N)
            .mul("distance", "energy")
            .mul("time", "momentum")
            .div("acceleration", "mass")
            .div("mass", "acceleration")
            .div("pressure", "area")
            .div("area", "pressure")
            .div("frequency", "momentum")
            .div("momentum", "frequency"),
        FamilyDef::new("area", "square meter", "square meters")
            .unit("m2", 1.0)
            .unit("km2", 1e6)
            .unit("acre", ACRE_M2)
            .unit("arpent", ARPENT_M2)
            .unit("ha", HA_M2)
            .mul("distance", "volume")
            .mul("pressure", "force")
            .mul("illuminance", "light flow")
            .div("distance", "distance"),
        FamilyDef::new("volume", "cubic meter", "cubic meters")
            .unit("m3", 1.0)
            .unit("km3", 1e9)
            .unit("l", L_M3)
            .div("distance", "area")
            .div("area", "distance"),
        FamilyDef::new("energy", "joule", "joules")
            .unit("j", 1.0)
            .unit("kwh", KWH_J)
            .unit("kgm", KGM_J)
            .unit("cal", CAL_J)
            .unit("kcal", CAL_J * 1e3)
            .unit("ev", EV_J)
            .mul("frequency", "power")
            .div("distance", "force")
            .div("force", "distance")
            .div("voltage", "charge")
            .div("charge", "voltage"),
        FamilyDef::new("power", "watt", "watts")
            .unit("w", 1.0)
            .unit("ch", CH_W)
            .unit("hp", HP_W)
            .mul("time", "energy")
            .div("frequency", "energy")
            .div("voltage", "current")
            .div("current", "voltage"),
        FamilyDef::new("frequency", "hertz", "hertz")
            .unit("hz", 1.0)
            .mul("distance", "velocity")
            .mul("velocity", "acceleration")
            .mul("energy", "power")
            .mul("momentum", "force")
            .inverse("time"),
        FamilyDef::new("flow", "cubic meter per second", "cubic meters per second")
            .unit("m3s", 1.0)
            .unit("m3m", MIN_S)
            .unit("m3min", MIN_S)
            .unit("m3h", H_S)
            .unit("ls", L_M3)
            .unit("lm", MIN_S * L_M3)
            .unit("lmin", MIN_S * L_M3)
            .unit("lh", H_S * L_M3)
            .mul("time", "volume")
            .div("frequency", "volume")
            .div("volume", "frequency")
            .div("area", "velocity")
            .div("velocity", "area"),
        FamilyDef::new("momentum", "kilogram meter per second", "kilogram meters per second")
            .unit("kgmps", 1.0)
            .mul("frequency", "force")
            .div("mass", "velocity")
            .div("velocity", "mass")
            .div("force", "time")
            .div("time", "force"),
        FamilyDef::new("pressure", "pascal", "pascals")
            .unit("pa", 1.0)
            .unit("bar", BAR_PA)
            .mul("area", "force"),
        FamilyDef::new("chemical amount", "mole", "moles").unit("mol", 1.0),
        FamilyDef::new("temperature", "Kelvin degree", "Kelvin degrees")
            .unit("k", 1.0)
            .unit_affine("c", celsius_to_kelvin, kelvin_to_celsius)
            .unit_affine("f", fahrenheit_to_kelvin, kelvin_to_fahrenheit),
        FamilyDef::new("angle", "radian", "radians")
            .unit("rad", 1.0)
            .unit("deg", DEG_RAD)
            .unit("gon", GON_RAD)
            .div("time", "angular velocity")
            .div("angular velocity", "time"),
        FamilyDef::new("angular velocity", "radian per second", "radians per second")
            .unit("rads", 1.0)
            .unit("radmin", MIN_S)
            .unit("radh", H_S)
            .unit("degs", DEG_RAD)
            .unit("rpm", RPM_RADS)
            .mul("time", "angle"),
        FamilyDef::new("light intensity", "candela", "candelas").unit("cd", 1.0),
        FamilyDef::new("light flow", "lumen", "lumens")
            .unit("lm", 1.0)
            .div("area", "illuminance")
            .div("illuminance", "area"),
        FamilyDef::new("illuminance", "lux", "lux")
            .unit("lx", 1.0)
            .unit("phot", PHOT_LX)
            .unit("nox", NOX_LX)
            .mul("area", "light flow"),
        FamilyDef::new("magnetic field", "tesla", "teslas")
            .unit("t", 1.0)
            .unit("gamma", GAMMA_T)
            .unit("g", G_T),
        FamilyDef::new("current", "ampere", "amperes")
            .unit("a", 1.0)
            .unit("ma", 1e-3)
            .mul("time", "charge"),
        FamilyDef::new("charge", "coulomb", "coulombs")
            .unit("c", 1.0)
            .div("time", "current")
            .div("current", "time"),
        FamilyDef::new("voltage", "volt", "volts")
            .unit("v", 1.0)
            .unit("kv", 1e3),
        FamilyDef::new("resistance", "ohm", "ohms").unit("ohm", 1.0),
        FamilyDef::new("capacity", "farad", "farads")
            .unit("f", 1.0)
            .unit("uf", 1e-6),
    ]
}

/// Construct a distance from any registered distance unit.
pub fn distance(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(DISTANCE, unit, value)
}

/// Construct a time from any registered time unit.
pub fn time(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(TIME, unit, value)
}

/// Construct a velocity from any registered velocity unit.
pub fn velocity(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(VELOCITY, unit, value)
}

pub fn acceleration(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(ACCELERATION, unit, value)
}

pub fn mass(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(MASS, unit, value)
}

pub fn force(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(FORCE, unit, value)
}

pub fn area(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(AREA, unit, value)
}

pub fn volume(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(VOLUME, unit, value)
}

pub fn energy(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(ENERGY, unit, value)
}

pub fn power(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(POWER, unit, value)
}

pub fn frequency(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(FREQUENCY, unit, value)
}

pub fn flow(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(FLOW, unit, value)
}

pub fn momentum(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(MOMENTUM, unit, value)
}

pub fn pressure(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(PRESSURE, unit, value)
}

pub fn chemical_amount(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(CHEMICAL_AMOUNT, unit, value)
}

pub fn temperature(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(TEMPERATURE, unit, value)
}

pub fn angle(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(ANGLE, unit, value)
}

pub fn angular_velocity(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(ANGULAR_VELOCITY, unit, value)
}

pub fn light_intensity(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(LIGHT_INTENSITY, unit, value)
}

pub fn light_flow(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(LIGHT_FLOW, unit, value)
}

pub fn illuminance(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(ILLUMINANCE, unit, value)
}

pub fn magnetic_field(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(MAGNETIC_FIELD, unit, value)
}

pub fn current(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(CURRENT, unit, value)
}

pub fn charge(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(CHARGE, unit, value)
}

pub fn voltage(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(VOLTAGE, unit, value)
}

pub fn resistance(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(RESISTANCE, unit, value)
}

pub fn capacity(unit: &str, value: f64) -> Result<Quantity, UnitError> {
    Quantity::of(CAPACITY, unit, value)
}
