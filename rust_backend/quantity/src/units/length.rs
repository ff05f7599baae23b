//! Length and volume units.
//!
//! The canonical scaling unit for length is the metre (`factor == 1.0`). The ångström (`1e-10 m`, exact) is the
//! natural unit for scattering wavenumbers, so it is registered under all its common spellings.
//!
//! ```rust
//! use prism_quantity::UnitRegistry;
//!
//! let nm = UnitRegistry::global().parse_unit("nanometre").unwrap();
//! let a = UnitRegistry::global().parse_unit("Å").unwrap();
//! assert!((nm.conversion_factor_to(&a).unwrap() - 10.0).abs() < 1e-12);
//! ```

use super::UnitDef;
use crate::Dimension;

/// Metre to ångström.
pub const METERS_PER_ANGSTROM: f64 = 1e-10;

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::prefixed("meter", "m", &["metre"], 1.0, Dimension::LENGTH),
    UnitDef::plain(
        "angstrom",
        "Å",
        &["Angstrom", "ångström", "Ångström", "\u{212B}"],
        METERS_PER_ANGSTROM,
        Dimension::LENGTH,
    ),
    UnitDef::plain("micron", "µm", &[], 1e-6, Dimension::LENGTH),
    UnitDef::prefixed(
        "liter",
        "L",
        &["litre", "l"],
        1e-3,
        Dimension::LENGTH.powi(3),
    ),
];
