//! Mass units.
//!
//! The SI coherent unit is the kilogram, so the gram carries `factor == 1e-3` and prefixes attach to the gram
//! (`kg`, `mg`, …). Molar masses such as `g/mol` are built by the parser from `gram` and `mole`.

use super::UnitDef;
use crate::Dimension;

/// Unified atomic mass unit (dalton) in kilograms, CODATA 2018.
pub const KILOGRAMS_PER_DALTON: f64 = 1.660_539_066_60e-27;

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::prefixed("gram", "g", &["gramme"], 1e-3, Dimension::MASS),
    UnitDef::prefixed(
        "dalton",
        "Da",
        &["amu", "atomic_mass_unit"],
        KILOGRAMS_PER_DALTON,
        Dimension::MASS,
    ),
    UnitDef::plain("tonne", "t", &["metric_ton"], 1e3, Dimension::MASS),
];
