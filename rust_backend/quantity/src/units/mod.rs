//! Built-in unit tables grouped by dimension.
//!
//! `prism-quantity` ships the units that reduced-unit work on polymer systems needs out of the box. Every table is
//! loaded into [`UnitRegistry::new`](crate::UnitRegistry::new).
//!
//! ## Modules
//!
//! - [`length`]: metre (canonical), ångström, micron, litre.
//! - [`mass`]: gram (kilogram canonical), dalton, tonne.
//! - [`time`]: second (canonical), minute, hour, day.
//! - [`energy`]: joule (canonical), calorie, electron-volt, plus force, pressure and power.
//! - [`base`]: the remaining SI base units (kelvin, mole, ampere, candela) and the coulomb.
//!
//! Prefixes (`kilo`/`k` … `yocto`/`y`) combine with any unit marked prefixable: `kilojoule`, `kJ`, `nanometre`,
//! `nm`, `mmol`.

use crate::dimension::Dimension;
use crate::unit::Unit;

pub mod base;
pub mod energy;
pub mod length;
pub mod mass;
pub mod time;

/// A row of a unit table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    /// Long name, e.g. `nanometer`.
    pub name: &'static str,
    /// Short symbol, e.g. `nm`.
    pub symbol: &'static str,
    /// Extra spellings accepted by the parser (`metre`, `Angstrom`, …).
    pub aliases: &'static [&'static str],
    /// Multiplier to the SI coherent unit.
    pub factor: f64,
    /// Dimension vector.
    pub dimension: Dimension,
    /// Whether SI prefixes may be attached.
    pub prefixable: bool,
}

impl UnitDef {
    /// A unit that accepts SI prefixes.
    pub const fn prefixed(
        name: &'static str,
        symbol: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
        dimension: Dimension,
    ) -> Self {
        Self {
            name,
            symbol,
            aliases,
            factor,
            dimension,
            prefixable: true,
        }
    }

    /// A unit that is only recognised as written.
    pub const fn plain(
        name: &'static str,
        symbol: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
        dimension: Dimension,
    ) -> Self {
        Self {
            name,
            symbol,
            aliases,
            factor,
            dimension,
            prefixable: false,
        }
    }

    /// A physical constant used as a unit.
    pub const fn constant(
        name: &'static str,
        symbol: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
        dimension: Dimension,
    ) -> Self {
        Self::plain(name, symbol, aliases, factor, dimension)
    }

    /// The runtime unit described by this row.
    pub fn to_unit(&self) -> Unit {
        Unit::new(self.symbol, self.factor, self.dimension)
    }
}

/// An SI prefix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prefix {
    /// Long form, e.g. `kilo`.
    pub name: &'static str,
    /// Symbol, e.g. `k`.
    pub symbol: &'static str,
    /// Scale factor.
    pub factor: f64,
}

const fn prefix(name: &'static str, symbol: &'static str, factor: f64) -> Prefix {
    Prefix {
        name,
        symbol,
        factor,
    }
}

/// SI prefixes. `µ` (micro sign), `μ` (Greek mu) and `u` all mean micro.
pub const PREFIXES: &[Prefix] = &[
    prefix("yotta", "Y", 1e24),
    prefix("zetta", "Z", 1e21),
    prefix("exa", "E", 1e18),
    prefix("peta", "P", 1e15),
    prefix("tera", "T", 1e12),
    prefix("giga", "G", 1e9),
    prefix("mega", "M", 1e6),
    prefix("kilo", "k", 1e3),
    prefix("hecto", "h", 1e2),
    prefix("deca", "da", 1e1),
    prefix("deka", "da", 1e1),
    prefix("deci", "d", 1e-1),
    prefix("centi", "c", 1e-2),
    prefix("milli", "m", 1e-3),
    prefix("micro", "µ", 1e-6),
    prefix("micro", "μ", 1e-6),
    prefix("micro", "u", 1e-6),
    prefix("nano", "n", 1e-9),
    prefix("pico", "p", 1e-12),
    prefix("femto", "f", 1e-15),
    prefix("atto", "a", 1e-18),
    prefix("zepto", "z", 1e-21),
    prefix("yocto", "y", 1e-24),
];

/// Every built-in table, constants included.
pub(crate) fn builtin() -> impl Iterator<Item = &'static UnitDef> {
    length::DEFINITIONS
        .iter()
        .chain(mass::DEFINITIONS)
        .chain(time::DEFINITIONS)
        .chain(energy::DEFINITIONS)
        .chain(base::DEFINITIONS)
        .chain(crate::constants::DEFINITIONS)
}
