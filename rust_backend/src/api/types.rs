//! Python-facing wrapper types.
//!
//! Values cross the boundary as plain floats and lists; quantities are
//! reduced to their magnitude in the default unit of each kind.

use pyo3::prelude::*;

use crate::config::ConverterConfig;
use crate::converter::UnitConverter;
use crate::kind::ReducedKind;

/// A float or a list of floats coming from Python.
#[derive(Debug, Clone, FromPyObject)]
pub enum ReducedInput {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Result with the same shape as the [`ReducedInput`] it came from.
#[derive(Debug, Clone, PartialEq, IntoPyObject)]
pub enum ReducedOutput {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Reduced-unit converter exposed to Python as `prism_units.UnitConverter`.
#[pyclass(name = "UnitConverter", module = "prism_units", frozen)]
#[derive(Debug, Clone)]
pub struct PyUnitConverter {
    inner: UnitConverter,
}

impl PyUnitConverter {
    pub fn inner(&self) -> &UnitConverter {
        &self.inner
    }

    fn physical(&self, kind: ReducedKind, x: ReducedInput) -> ReducedOutput {
        match x {
            ReducedInput::Scalar(v) => {
                ReducedOutput::Scalar(self.inner.to_physical(kind, v).into_value())
            }
            ReducedInput::Array(v) => {
                ReducedOutput::Array(self.inner.to_physical(kind, v).into_value())
            }
        }
    }
}

#[pymethods]
impl PyUnitConverter {
    #[new]
    #[pyo3(signature = (
        dc = 1.0,
        dc_unit = "nanometer",
        mc = 14.02,
        mc_unit = "gram/mole",
        ec = 2.48,
        ec_unit = "kilojoule/mole"
    ))]
    pub fn new(
        dc: f64,
        dc_unit: &str,
        mc: f64,
        mc_unit: &str,
        ec: f64,
        ec_unit: &str,
    ) -> PyResult<Self> {
        let inner = UnitConverter::new(dc, dc_unit, mc, mc_unit, ec, ec_unit)?;
        Ok(Self { inner })
    }

    /// Build a converter from a TOML or JSON configuration file.
    #[staticmethod]
    pub fn from_config(path: &str) -> PyResult<Self> {
        let inner = ConverterConfig::from_file(path)?.build()?;
        Ok(Self { inner })
    }

    /// Reduced temperature to kelvin.
    #[pyo3(name = "toKelvin")]
    pub fn to_kelvin(&self, x: ReducedInput) -> ReducedOutput {
        self.physical(ReducedKind::Temperature, x)
    }

    /// Reduced wavenumber to inverse ångström.
    #[pyo3(name = "toInvAngstrom")]
    pub fn to_inv_angstrom(&self, x: ReducedInput) -> ReducedOutput {
        self.physical(ReducedKind::Wavenumber, x)
    }

    /// Reduced value of any kind (`"time"`, `"pressure"`, ...) in its default unit.
    #[pyo3(name = "toPhysical")]
    pub fn to_physical(&self, kind: &str, x: ReducedInput) -> PyResult<ReducedOutput> {
        let kind: ReducedKind = kind.parse()?;
        Ok(self.physical(kind, x))
    }

    /// Characteristic length as `(value, unit)`.
    #[getter]
    pub fn dc(&self) -> (f64, String) {
        (self.inner.dc().value(), self.inner.dc().unit().symbol())
    }

    /// Characteristic mass as `(value, unit)`.
    #[getter]
    pub fn mc(&self) -> (f64, String) {
        (self.inner.mc().value(), self.inner.mc().unit().symbol())
    }

    /// Characteristic energy as `(value, unit)`.
    #[getter]
    pub fn ec(&self) -> (f64, String) {
        (self.inner.ec().value(), self.inner.ec().unit().symbol())
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

