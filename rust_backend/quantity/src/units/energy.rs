//! Energy units and the mechanical units derived alongside them.
//!
//! The joule is canonical. The thermochemical calorie is exactly `4.184 J`; the electron-volt is the elementary
//! charge times one volt.

use super::UnitDef;
use crate::constants::ELEMENTARY_CHARGE;
use crate::Dimension;

/// Joules per thermochemical calorie (exact).
pub const JOULES_PER_CALORIE: f64 = 4.184;

const FORCE: Dimension = Dimension::ENERGY.div(Dimension::LENGTH);
const PRESSURE: Dimension = FORCE.div(Dimension::LENGTH.powi(2));
const POWER: Dimension = Dimension::ENERGY.div(Dimension::TIME);

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::prefixed("joule", "J", &[], 1.0, Dimension::ENERGY),
    UnitDef::prefixed(
        "calorie",
        "cal",
        &["thermochemical_calorie"],
        JOULES_PER_CALORIE,
        Dimension::ENERGY,
    ),
    UnitDef::prefixed(
        "electron_volt",
        "eV",
        &["electronvolt"],
        ELEMENTARY_CHARGE,
        Dimension::ENERGY,
    ),
    UnitDef::prefixed("newton", "N", &[], 1.0, FORCE),
    UnitDef::prefixed("pascal", "Pa", &[], 1.0, PRESSURE),
    UnitDef::prefixed("bar", "bar", &[], 1e5, PRESSURE),
    UnitDef::plain("atmosphere", "atm", &[], 101_325.0, PRESSURE),
    UnitDef::prefixed("watt", "W", &[], 1.0, POWER),
];
