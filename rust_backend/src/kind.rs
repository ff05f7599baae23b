//! Kinds of reduced quantities the converter understands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnitConverterError;

/// A physical quantity that has a reduced (dimensionless) counterpart.
///
/// Each kind has a characteristic scale built from the three base scales
/// (length `dc`, mass `mc`, energy `ec`) and a default unit used when a reduced
/// value is converted back to physical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReducedKind {
    /// `dc`
    Length,
    /// `mc`
    Mass,
    /// `ec`
    Energy,
    /// `ec / k_B`
    Temperature,
    /// `1 / dc`
    Wavenumber,
    /// `dc * sqrt(mc / ec)`
    Time,
    /// `1 / dc^3`
    NumberDensity,
    /// `mc / dc^3`
    MassDensity,
    /// `ec / dc^3`
    Pressure,
}

impl ReducedKind {
    /// Every kind, in declaration order.
    pub const ALL: [ReducedKind; 9] = [
        ReducedKind::Length,
        ReducedKind::Mass,
        ReducedKind::Energy,
        ReducedKind::Temperature,
        ReducedKind::Wavenumber,
        ReducedKind::Time,
        ReducedKind::NumberDensity,
        ReducedKind::MassDensity,
        ReducedKind::Pressure,
    ];

    /// Snake-case name, as accepted by `FromStr` and used by serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReducedKind::Length => "length",
            ReducedKind::Mass => "mass",
            ReducedKind::Energy => "energy",
            ReducedKind::Temperature => "temperature",
            ReducedKind::Wavenumber => "wavenumber",
            ReducedKind::Time => "time",
            ReducedKind::NumberDensity => "number_density",
            ReducedKind::MassDensity => "mass_density",
            ReducedKind::Pressure => "pressure",
        }
    }

    /// Position in [`ReducedKind::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Unit expression physical values of this kind are reported in.
    pub fn default_unit(&self) -> &'static str {
        match self {
            ReducedKind::Length => "nm",
            ReducedKind::Mass => "g/mol",
            ReducedKind::Energy => "kJ/mol",
            ReducedKind::Temperature => "K",
            ReducedKind::Wavenumber => "1/Å",
            ReducedKind::Time => "ps",
            ReducedKind::NumberDensity => "1/nm^3",
            ReducedKind::MassDensity => "g/cm^3",
            ReducedKind::Pressure => "MPa",
        }
    }
}

impl fmt::Display for ReducedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReducedKind {
    type Err = UnitConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ReducedKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                UnitConverterError::ConfigurationError(format!("Unknown reduced quantity kind: {}", s))
            })
    }
}
