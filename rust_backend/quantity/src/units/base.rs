//! Remaining SI base units.
//!
//! Kelvin is the only temperature unit: offset scales (°C, °F) are not multiplicative and are not modelled.

use super::UnitDef;
use crate::Dimension;

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::prefixed("kelvin", "K", &["degK"], 1.0, Dimension::TEMPERATURE),
    UnitDef::prefixed("mole", "mol", &[], 1.0, Dimension::SUBSTANCE),
    UnitDef::prefixed("ampere", "A", &["amp"], 1.0, Dimension::CURRENT),
    UnitDef::prefixed("candela", "cd", &[], 1.0, Dimension::LUMINOSITY),
    UnitDef::prefixed(
        "coulomb",
        "C",
        &[],
        1.0,
        Dimension::CURRENT.mul(Dimension::TIME),
    ),
];
