//! Integration-level smoke tests for the `prism-quantity` crate.

use prism_quantity::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

fn ureg() -> &'static UnitRegistry {
    UnitRegistry::global()
}

#[test]
fn smoke_test_length() {
    let nm = ureg().quantity(2.5, "nanometers").unwrap();
    let a = nm.to_expr("Å").unwrap();
    assert_abs_diff_eq!(a.value(), 25.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_molar_mass() {
    let mc = ureg().quantity(14.02, "gram/mole").unwrap();
    let kg = mc.to_expr("kg/mol").unwrap();
    assert_abs_diff_eq!(kg.value(), 0.01402, epsilon = 1e-12);
    let da = (mc / constants::avogadro()).to_expr("dalton").unwrap();
    assert_relative_eq!(da.value(), 14.02, max_relative = 1e-6);
}

#[test]
fn smoke_test_energy() {
    let e = ureg().quantity(1.0, "kcal/mol").unwrap();
    let kj = e.to_expr("kJ/mol").unwrap();
    assert_relative_eq!(kj.value(), 4.184, max_relative = 1e-12);
}

#[test]
fn smoke_test_electron_volt_to_kelvin() {
    // 1 eV / k_B is about 11604.5 K
    let e = ureg().quantity(1.0, "eV").unwrap();
    let t = (e / constants::boltzmann()).to_expr("K").unwrap();
    assert_relative_eq!(t.value(), 11_604.518, max_relative = 1e-6);
}

#[test]
fn smoke_test_pressure() {
    let p = ureg().quantity(1.0, "atm").unwrap();
    let bar = p.to_expr("bar").unwrap();
    assert_relative_eq!(bar.value(), 1.01325, max_relative = 1e-12);
}

#[test]
fn array_magnitudes_convert_element_wise() {
    let q = ureg().quantity(vec![0.5, 1.0, 2.0], "nm").unwrap();
    let a = q.to_expr("angstrom").unwrap();
    assert_eq!(a.magnitude().len(), 3);
    for (x, y) in q.magnitude().iter().zip(a.magnitude()) {
        assert_relative_eq!(*y, x * 10.0, max_relative = 1e-12);
    }
}

#[test]
fn fixed_size_array_magnitudes() {
    let q = ureg().quantity([1.0, 2.0], "kJ/mol").unwrap();
    let r = (q / constants::molar_gas_constant()).to_expr("kelvin").unwrap();
    assert_relative_eq!(r.magnitude()[1], 2.0 * r.magnitude()[0], max_relative = 1e-12);
}

#[test]
fn mixing_dimensions_is_rejected() {
    let length = ureg().quantity(1.0, "nm").unwrap();
    let energy = ureg().quantity(1.0, "kJ/mol").unwrap();
    let err = length.try_add(&energy).unwrap_err();
    match err {
        QuantityError::Dimensionality { from, to, .. } => {
            assert_eq!(from, Dimension::ENERGY / Dimension::SUBSTANCE);
            assert_eq!(to, Dimension::LENGTH);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn error_messages_name_the_units() {
    let err = ureg()
        .quantity(1.0, "nm")
        .unwrap()
        .to_expr("kelvin")
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("nm"), "{msg}");
    assert!(msg.contains("[temperature]"), "{msg}");
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn serialize_with_unit_symbol() {
        let q = ureg().quantity(2.48, "kJ/mol").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":2.48,"unit":"kJ/mol"}"#);
    }

    #[test]
    fn deserialize_parses_unit() {
        let q: Quantity = serde_json::from_str(r#"{"value": 1.0, "unit": "nanometer"}"#).unwrap();
        assert_eq!(q.unit().symbol(), "nm");
    }

    #[test]
    fn deserialize_rejects_unknown_unit() {
        let result: Result<Quantity, _> = serde_json::from_str(r#"{"value": 1.0, "unit": "parsec"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn array_roundtrip() {
        let q = ureg().quantity(vec![1.0, 2.0], "1/nm^3").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity<Vec<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), vec![1.0, 2.0]);
        assert!(back.unit().is_equivalent_to(q.unit()));
    }
}
