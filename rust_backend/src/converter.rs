//! Reduced-unit converter.
//!
//! PRISM calculations are carried out in reduced units: every length is a
//! multiple of a characteristic length `dc`, every energy a multiple of `ec`
//! and every mass a multiple of `mc`. [`UnitConverter`] holds those three
//! scales and maps reduced values back to physical units (and physical values
//! to reduced ones).
//!
//! # Example
//!
//! ```rust
//! use prism_units::UnitConverter;
//!
//! let uc = UnitConverter::new(1.0, "nanometer", 14.02, "gram/mole", 2.48, "kilojoule/mole").unwrap();
//!
//! let t = uc.to_kelvin(1.25);
//! assert!((t.value() - 372.84).abs() < 0.01);
//!
//! let k = uc.to_inv_angstrom(vec![0.01, 1.0]);
//! assert!((k.value()[0] - 0.001).abs() < 1e-12);
//! assert!((k.value()[1] - 0.1).abs() < 1e-12);
//! ```

use log::debug;
use once_cell::sync::Lazy;
use prism_quantity::{constants, BaseDimension, Dimension, Magnitude, Quantity, Unit, UnitRegistry};
use std::fmt;
use std::sync::Arc;

use crate::config::{CharacteristicScales, ConverterConfig, ScaleSpec};
use crate::error::{ConverterResult, UnitConverterError};
use crate::kind::ReducedKind;

static DEFAULT_REGISTRY: Lazy<Arc<UnitRegistry>> = Lazy::new(|| Arc::new(UnitRegistry::new()));

const LENGTH_DIMENSIONS: [Dimension; 1] = [Dimension::LENGTH];
const MASS_DIMENSIONS: [Dimension; 2] = [Dimension::MASS, Dimension::MASS.div(Dimension::SUBSTANCE)];
const ENERGY_DIMENSIONS: [Dimension; 2] = [
    Dimension::ENERGY,
    Dimension::ENERGY.div(Dimension::SUBSTANCE),
];

/// Converts between reduced (dimensionless) values and physical quantities.
///
/// The converter is immutable once built and can be shared freely between
/// threads. Characteristic mass and energy may be molar (`gram/mole`,
/// `kilojoule/mole`) or per particle (`dalton`, `electron_volt`); formulas that
/// need a per-particle value divide a molar scale by Avogadro's number.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    scales: CharacteristicScales,
    dc: Quantity,
    mc: Quantity,
    ec: Quantity,
    dc_angstrom: Quantity,
    /// Characteristic quantity per [`ReducedKind`], in the kind's default unit.
    characteristics: Vec<Quantity>,
    registry: Arc<UnitRegistry>,
}

impl UnitConverter {
    /// Build a converter from three `(magnitude, unit)` pairs.
    ///
    /// # Errors
    /// * `InvalidScaleError` if a magnitude is zero, negative, NaN or infinite
    /// * `InvalidUnitError` if a unit string cannot be resolved
    /// * `DimensionalityError` if a unit resolves to the wrong kind of quantity
    pub fn new(
        dc: f64,
        dc_unit: &str,
        mc: f64,
        mc_unit: &str,
        ec: f64,
        ec_unit: &str,
    ) -> ConverterResult<Self> {
        Self::from_scales(&CharacteristicScales {
            length: ScaleSpec::new(dc, dc_unit),
            mass: ScaleSpec::new(mc, mc_unit),
            energy: ScaleSpec::new(ec, ec_unit),
        })
    }

    /// Build a converter resolving units with the built-in registry.
    pub fn from_scales(scales: &CharacteristicScales) -> ConverterResult<Self> {
        Self::with_registry(scales, Arc::clone(&DEFAULT_REGISTRY))
    }

    /// Build a converter that resolves units (and output units) with `registry`.
    ///
    /// Useful when the scales are expressed in units defined at runtime with
    /// [`UnitRegistry::define`].
    pub fn with_registry(
        scales: &CharacteristicScales,
        registry: Arc<UnitRegistry>,
    ) -> ConverterResult<Self> {
        let dc = resolve_scale(&registry, "length", &scales.length, &LENGTH_DIMENSIONS)?;
        let mc = resolve_scale(&registry, "mass", &scales.mass, &MASS_DIMENSIONS)?;
        let ec = resolve_scale(&registry, "energy", &scales.energy, &ENERGY_DIMENSIONS)?;

        debug!("UnitConverter: dc = {}, mc = {}, ec = {}", dc, mc, ec);

        let characteristics = ReducedKind::ALL
            .iter()
            .map(|kind| {
                let raw = raw_characteristic(*kind, &dc, &mc, &ec)?;
                let target = parse_unit(&registry, kind.default_unit())?;
                let q = raw.to(&target)?;
                if !q.is_positive_finite() {
                    return Err(UnitConverterError::invalid_scale(kind.as_str(), q.value()));
                }
                Ok(q)
            })
            .collect::<ConverterResult<Vec<_>>>()?;
        let dc_angstrom = dc.to(&parse_unit(&registry, "Å")?)?;

        Ok(Self {
            scales: scales.clone(),
            dc,
            mc,
            ec,
            dc_angstrom,
            characteristics,
            registry,
        })
    }

    /// Characteristic length as given at construction.
    pub fn dc(&self) -> &Quantity {
        &self.dc
    }

    /// Characteristic mass as given at construction.
    pub fn mc(&self) -> &Quantity {
        &self.mc
    }

    /// Characteristic energy as given at construction.
    pub fn ec(&self) -> &Quantity {
        &self.ec
    }

    /// The unit registry backing this converter, for manual conversions.
    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    /// Configuration that rebuilds this converter.
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig {
            scales: self.scales.clone(),
        }
    }

    /// Characteristic quantity of `kind`, expressed in [`ReducedKind::default_unit`].
    ///
    /// Mass and energy are reported per mole regardless of how they were given.
    pub fn characteristic(&self, kind: ReducedKind) -> &Quantity {
        &self.characteristics[kind.index()]
    }

    /// Reduced temperature to kelvin: `x * ec / (k_B * N_A)` for a molar `ec`.
    pub fn to_kelvin<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Temperature, reduced)
    }

    /// Reduced wavenumber to `1/Å`: `x / dc`.
    pub fn to_inv_angstrom<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Wavenumber, reduced)
    }

    /// Reduced length to ångström.
    pub fn to_angstrom<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.dc_angstrom.scale(reduced)
    }

    /// Reduced length to nanometre.
    pub fn to_nanometer<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Length, reduced)
    }

    /// Reduced energy to kJ/mol.
    pub fn to_kilojoule_per_mole<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Energy, reduced)
    }

    /// Reduced time to picoseconds, with `tau = dc * sqrt(m / e)` per particle.
    pub fn to_picoseconds<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Time, reduced)
    }

    /// Reduced site density to `1/nm^3`.
    pub fn to_number_density<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::NumberDensity, reduced)
    }

    /// Reduced density to `g/cm^3` (`x * m / dc^3`).
    pub fn to_mass_density<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::MassDensity, reduced)
    }

    /// Reduced pressure to MPa (`x * e / dc^3`).
    pub fn to_pressure<M: Magnitude>(&self, reduced: M) -> Quantity<M> {
        self.to_physical(ReducedKind::Pressure, reduced)
    }

    /// Reduced value of `kind` in its default unit. Arrays convert element-wise.
    pub fn to_physical<M: Magnitude>(&self, kind: ReducedKind, reduced: M) -> Quantity<M> {
        self.characteristic(kind).scale(reduced)
    }

    /// Reduced value of `kind` in an arbitrary unit expression.
    ///
    /// # Errors
    /// * `InvalidUnitError` if `unit` cannot be resolved
    /// * `DimensionalityError` if `unit` does not measure `kind`
    pub fn to_physical_in<M: Magnitude>(
        &self,
        kind: ReducedKind,
        reduced: M,
        unit: &str,
    ) -> ConverterResult<Quantity<M>> {
        let target = parse_unit(&self.registry, unit)?;
        Ok(self.to_physical(kind, reduced).to(&target)?)
    }

    /// Physical quantity to its reduced value for `kind`.
    ///
    /// For [`ReducedKind::Mass`] and [`ReducedKind::Energy`] a per-particle
    /// value is accepted where the characteristic scale is molar, and the other
    /// way round. Every other kind must match its dimension exactly.
    ///
    /// # Errors
    /// * `DimensionalityError` if `quantity` does not measure `kind`
    pub fn to_reduced<M: Magnitude>(
        &self,
        kind: ReducedKind,
        quantity: &Quantity<M>,
    ) -> ConverterResult<M> {
        let ratio = quantity / self.characteristic(kind);
        let ratio = match (kind, amount_exponent(ratio.dimension())) {
            (ReducedKind::Mass | ReducedKind::Energy, Some(1)) => ratio * constants::avogadro(),
            (ReducedKind::Mass | ReducedKind::Energy, Some(-1)) => ratio / constants::avogadro(),
            _ => ratio,
        };
        Ok(ratio.to_number()?)
    }

    /// Temperature in any unit to reduced temperature.
    pub fn from_kelvin<M: Magnitude>(&self, temperature: &Quantity<M>) -> ConverterResult<M> {
        self.to_reduced(ReducedKind::Temperature, temperature)
    }

    /// Wavenumber in any unit to reduced wavenumber.
    pub fn from_inv_angstrom<M: Magnitude>(&self, wavenumber: &Quantity<M>) -> ConverterResult<M> {
        self.to_reduced(ReducedKind::Wavenumber, wavenumber)
    }
}

impl fmt::Display for UnitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<UnitConverter>")?;
        for (label, q) in [("dc", &self.dc), ("mc", &self.mc), ("ec", &self.ec)] {
            let base = q.to_base();
            writeln!(f, "  {}: {} ({:e} {})", label, q, base.value(), base.unit())?;
        }
        writeln!(
            f,
            "  temperature: {:.2}",
            self.characteristic(ReducedKind::Temperature)
        )?;
        write!(f, "  time: {:.4}", self.characteristic(ReducedKind::Time))
    }
}

fn parse_unit(registry: &UnitRegistry, expr: &str) -> ConverterResult<Unit> {
    registry
        .parse_unit(expr)
        .map_err(|e| UnitConverterError::invalid_unit(expr, e))
}

fn resolve_scale(
    registry: &UnitRegistry,
    name: &str,
    scale: &ScaleSpec,
    allowed: &[Dimension],
) -> ConverterResult<Quantity> {
    if !(scale.value.is_finite() && scale.value > 0.0) {
        return Err(UnitConverterError::invalid_scale(name, scale.value));
    }

    let unit = parse_unit(registry, &scale.unit)?;
    let magnitude = scale.value * unit.factor();
    if !(magnitude.is_finite() && magnitude > 0.0) {
        return Err(UnitConverterError::invalid_scale(name, magnitude));
    }
    if !allowed.contains(&unit.dimension()) {
        let expected = allowed
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(UnitConverterError::DimensionalityError(format!(
            "characteristic {} must be {}, got '{}' ({})",
            name,
            expected,
            scale.unit,
            unit.dimension()
        )));
    }

    Ok(Quantity::new(scale.value, unit))
}

/// `Some(n)` when `dimension` is exactly `[substance] ** n` with `n` of 1 or -1.
fn amount_exponent(dimension: Dimension) -> Option<i8> {
    [1, -1]
        .into_iter()
        .find(|n| dimension == Dimension::SUBSTANCE.powi(*n))
}

fn is_molar(q: &Quantity) -> bool {
    q.dimension().exponent(BaseDimension::Substance) == -1
}

fn per_particle(q: &Quantity) -> Quantity {
    if is_molar(q) {
        q / &constants::avogadro()
    } else {
        q.clone()
    }
}

fn per_mole(q: &Quantity) -> Quantity {
    if is_molar(q) {
        q.clone()
    } else {
        q * &constants::avogadro()
    }
}

fn raw_characteristic(
    kind: ReducedKind,
    dc: &Quantity,
    mc: &Quantity,
    ec: &Quantity,
) -> ConverterResult<Quantity> {
    let volume = dc.powi(3)?;
    let q = match kind {
        ReducedKind::Length => dc.clone(),
        ReducedKind::Mass => per_mole(mc),
        ReducedKind::Energy => per_mole(ec),
        ReducedKind::Temperature => &per_particle(ec) / &constants::boltzmann(),
        ReducedKind::Wavenumber => dc.recip(),
        ReducedKind::Time => dc * &(&per_particle(mc) / &per_particle(ec)).sqrt()?,
        ReducedKind::NumberDensity => volume.recip(),
        ReducedKind::MassDensity => &per_particle(mc) / &volume,
        ReducedKind::Pressure => &per_particle(ec) / &volume,
    };
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn polyethylene() -> UnitConverter {
        UnitConverter::new(1.0, "nanometer", 14.02, "gram/mole", 2.48, "kilojoule/mole").unwrap()
    }

    #[test]
    fn test_to_kelvin_matches_reference_value() {
        let t = polyethylene().to_kelvin(1.25);
        assert_abs_diff_eq!(t.value(), 372.84, epsilon = 0.01);
        assert_eq!(t.unit().symbol(), "K");
    }

    #[test]
    fn test_to_inv_angstrom_matches_reference_values() {
        let uc = polyethylene();
        assert_abs_diff_eq!(uc.to_inv_angstrom(0.01).value(), 0.001, epsilon = 1e-12);
        assert_abs_diff_eq!(uc.to_inv_angstrom(1.0).value(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_temperature_uses_gas_constant_for_molar_energy() {
        let t = polyethylene().characteristic(ReducedKind::Temperature).value();
        assert_relative_eq!(t, 2480.0 / constants::MOLAR_GAS_CONSTANT, max_relative = 1e-12);
    }

    #[test]
    fn test_per_particle_energy_gives_same_temperature() {
        let molar = polyethylene();
        let ev_per_particle = 2.48e3 / constants::AVOGADRO / constants::ELEMENTARY_CHARGE;
        let particle =
            UnitConverter::new(1.0, "nm", 14.02, "g/mol", ev_per_particle, "eV").unwrap();
        assert_relative_eq!(
            particle.to_kelvin(1.0).value(),
            molar.to_kelvin(1.0).value(),
            max_relative = 1e-9
        );
        // reported per mole either way
        assert_relative_eq!(
            particle.characteristic(ReducedKind::Energy).value(),
            2.48,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_time_scale() {
        // tau = dc * sqrt(m / e) with m = 14.02 g/mol, e = 2.48 kJ/mol
        let expected_s = 1e-9 * (14.02e-3 / 2.48e3_f64).sqrt();
        let tau = polyethylene().to_picoseconds(1.0);
        assert_eq!(tau.unit().symbol(), "ps");
        assert_relative_eq!(tau.value(), expected_s * 1e12, max_relative = 1e-9);
    }

    #[test]
    fn test_densities_and_pressure() {
        let uc = polyethylene();
        assert_relative_eq!(uc.to_number_density(0.5).value(), 0.5, max_relative = 1e-12);

        // 14.02 g/mol per nm^3 is 14.02 / N_A g in 1e-21 cm^3
        let rho = uc.to_mass_density(1.0).value();
        assert_relative_eq!(rho, 14.02 / constants::AVOGADRO / 1e-21, max_relative = 1e-9);

        // 2.48 kJ/mol per nm^3
        let p = uc.to_pressure(1.0).value();
        assert_relative_eq!(p, 2.48e3 / constants::AVOGADRO / 1e-27 / 1e6, max_relative = 1e-9);
    }

    #[test]
    fn test_lengths() {
        let uc = UnitConverter::new(3.5, "Å", 14.02, "g/mol", 2.48, "kJ/mol").unwrap();
        assert_relative_eq!(uc.to_angstrom(2.0).value(), 7.0, max_relative = 1e-12);
        assert_eq!(uc.to_angstrom(2.0).unit().symbol(), "Å");
        assert_relative_eq!(uc.to_nanometer(2.0).value(), 0.7, max_relative = 1e-12);
        assert_eq!(uc.dc().unit().symbol(), "Å");
    }

    #[test]
    fn test_round_trip_every_kind() {
        let uc = polyethylene();
        for kind in ReducedKind::ALL {
            let q = uc.to_physical(kind, 0.75);
            assert_relative_eq!(uc.to_reduced(kind, &q).unwrap(), 0.75, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_to_reduced_accepts_per_particle_energy() {
        let uc = polyethylene();
        let one_kt = uc
            .registry()
            .quantity(2.48e3 / constants::AVOGADRO, "J")
            .unwrap();
        assert_relative_eq!(uc.to_reduced(ReducedKind::Energy, &one_kt).unwrap(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_to_reduced_rejects_wrong_dimension() {
        let uc = polyethylene();
        let length = uc.registry().quantity(1.0, "nm").unwrap();
        let err = uc.from_kelvin(&length).unwrap_err();
        assert!(matches!(err, UnitConverterError::DimensionalityError(_)));
    }

    #[test]
    fn test_to_reduced_only_folds_avogadro_into_mass_and_energy() {
        let uc = polyethylene();
        let reg = uc.registry();

        let molar_temperature = reg.quantity(300.0, "K*mol").unwrap();
        assert!(matches!(
            uc.from_kelvin(&molar_temperature),
            Err(UnitConverterError::DimensionalityError(_))
        ));

        let molar_wavenumber = reg.quantity(0.1, "mol/angstrom").unwrap();
        assert!(matches!(
            uc.from_inv_angstrom(&molar_wavenumber),
            Err(UnitConverterError::DimensionalityError(_))
        ));
        assert!(matches!(
            uc.to_reduced(ReducedKind::Pressure, &reg.quantity(1.0, "MPa*mol").unwrap()),
            Err(UnitConverterError::DimensionalityError(_))
        ));

        // squared amount is never a per-particle form
        let energy = reg.quantity(2.48, "kJ*mol").unwrap();
        assert!(matches!(
            uc.to_reduced(ReducedKind::Energy, &energy),
            Err(UnitConverterError::DimensionalityError(_))
        ));

        let one_dalton = reg.quantity(14.02, "Da").unwrap();
        assert_relative_eq!(uc.to_reduced(ReducedKind::Mass, &one_dalton).unwrap(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_factor_in_unit_is_rejected() {
        let err = UnitConverter::new(1.0, "0*nm", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
        assert!(matches!(err, UnitConverterError::InvalidUnitError { ref unit, .. } if unit == "0*nm"));

        let err = UnitConverter::new(1.0, "1/0*m", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
        assert!(matches!(err, UnitConverterError::InvalidUnitError { .. }));
    }

    #[test]
    fn test_scale_checked_after_unit_factor() {
        let err = UnitConverter::new(1e300, "1e10*m", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
        assert!(matches!(
            err,
            UnitConverterError::InvalidScaleError { ref name, value } if name == "length" && value.is_infinite()
        ));
    }

    #[test]
    fn test_derived_scales_must_be_finite() {
        let err = UnitConverter::new(1e-120, "m", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
        assert!(matches!(
            err,
            UnitConverterError::InvalidScaleError { ref name, .. } if name == "number_density"
        ));
    }

    #[test]
    fn test_to_physical_in_custom_unit() {
        let uc = polyethylene();
        let e = uc.to_physical_in(ReducedKind::Energy, 1.0, "kcal/mol").unwrap();
        assert_relative_eq!(e.value(), 2.48 / 4.184, max_relative = 1e-12);
        assert!(matches!(
            uc.to_physical_in(ReducedKind::Energy, 1.0, "nm"),
            Err(UnitConverterError::DimensionalityError(_))
        ));
        assert!(matches!(
            uc.to_physical_in(ReducedKind::Energy, 1.0, "furlong"),
            Err(UnitConverterError::InvalidUnitError { .. })
        ));
    }

    #[test]
    fn test_invalid_scales() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = UnitConverter::new(bad, "nm", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
            assert!(matches!(err, UnitConverterError::InvalidScaleError { ref name, .. } if name == "length"));
        }
        let err = UnitConverter::new(1.0, "nm", 14.02, "g/mol", -2.48, "kJ/mol").unwrap_err();
        assert!(matches!(err, UnitConverterError::InvalidScaleError { ref name, .. } if name == "energy"));
    }

    #[test]
    fn test_wrong_slot_dimension() {
        let err = UnitConverter::new(1.0, "second", 14.02, "g/mol", 2.48, "kJ/mol").unwrap_err();
        match err {
            UnitConverterError::DimensionalityError(msg) => {
                assert!(msg.contains("characteristic length"), "{msg}");
                assert!(msg.contains("[time]"), "{msg}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_display_lists_scales() {
        let text = polyethylene().to_string();
        assert!(text.starts_with("<UnitConverter>"));
        assert!(text.contains("dc: 1 nm (1e-9 m)"), "{text}");
        assert!(text.contains("mc: 14.02 g/mol"), "{text}");
        assert!(text.contains("ec: 2.48 kJ/mol"), "{text}");
        assert!(text.contains("temperature: 298.28 K"), "{text}");
    }

    #[test]
    fn test_converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitConverter>();
    }
}
