//! Physical constants (CODATA 2018, exact SI values since the 2019 redefinition).
//!
//! The raw `f64` values are in SI coherent units. Each constant is also registered in [`UnitRegistry`] under its
//! long name and a short symbol (`boltzmann_constant`/`k_B`, `avogadro_constant`/`N_A`, …) so it can appear inside
//! unit expressions or be pulled out as a [`Quantity`] with [`constant`].

use crate::dimension::Dimension;
use crate::error::QuantityResult;
use crate::quantity::Quantity;
use crate::registry::UnitRegistry;
use crate::units::UnitDef;

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 6.022_140_76e23;
/// Molar gas constant `R = k_B * N_A`, J/(K mol).
pub const MOLAR_GAS_CONSTANT: f64 = BOLTZMANN * AVOGADRO;
/// Elementary charge, C.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// Planck constant, J s.
pub const PLANCK: f64 = 6.626_070_15e-34;

const ENTROPY: Dimension = Dimension::ENERGY.div(Dimension::TEMPERATURE);

pub(crate) const DEFINITIONS: &[UnitDef] = &[
    UnitDef::constant("boltzmann_constant", "k_B", &["k_b"], BOLTZMANN, ENTROPY),
    UnitDef::constant(
        "avogadro_constant",
        "N_A",
        &["avogadro_number", "n_a"],
        AVOGADRO,
        Dimension::SUBSTANCE.recip(),
    ),
    UnitDef::constant(
        "molar_gas_constant",
        "R",
        &["gas_constant"],
        MOLAR_GAS_CONSTANT,
        ENTROPY.div(Dimension::SUBSTANCE),
    ),
    UnitDef::constant(
        "elementary_charge",
        "e",
        &[],
        ELEMENTARY_CHARGE,
        Dimension::CURRENT.mul(Dimension::TIME),
    ),
    UnitDef::constant(
        "planck_constant",
        "h_planck",
        &[],
        PLANCK,
        Dimension::ENERGY.mul(Dimension::TIME),
    ),
];

/// Looks up a constant (or any unit) by name in the global registry as a quantity of magnitude one.
///
/// ```rust
/// use prism_quantity::constants;
///
/// let kb = constants::constant("boltzmann_constant").unwrap();
/// assert!((kb.to_base().value() - constants::BOLTZMANN).abs() < 1e-35);
/// ```
pub fn constant(name: &str) -> QuantityResult<Quantity> {
    UnitRegistry::global().quantity(1.0, name)
}

/// `k_B` as a quantity.
pub fn boltzmann() -> Quantity {
    Quantity::new(1.0, DEFINITIONS[0].to_unit())
}

/// `N_A` as a quantity.
pub fn avogadro() -> Quantity {
    Quantity::new(1.0, DEFINITIONS[1].to_unit())
}

/// `R` as a quantity.
pub fn molar_gas_constant() -> Quantity {
    Quantity::new(1.0, DEFINITIONS[2].to_unit())
}
