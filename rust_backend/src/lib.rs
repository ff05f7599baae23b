//! PRISM reduced-unit conversion.
//!
//! Integral-equation calculations work with dimensionless values measured in
//! characteristic length, mass and energy scales. This crate maps those
//! reduced values to physical quantities and back.
//!
//! - [`UnitConverter`]: holds the characteristic scales and performs conversions
//! - [`ReducedKind`]: the kinds of reduced quantity (temperature, wavenumber, ...)
//! - [`ConverterConfig`]: scales loaded from a TOML or JSON file
//! - [`prism_quantity`]: the unit algebra underneath, re-exported for manual work
//!
//! The `python` feature builds the `prism_units` extension module.

pub mod config;
pub mod converter;
pub mod error;
pub mod kind;

#[cfg(feature = "python")]
pub mod api;

pub use config::{CharacteristicScales, ConverterConfig, ScaleSpec};
pub use converter::UnitConverter;
pub use error::{ConverterResult, UnitConverterError};
pub use kind::ReducedKind;
pub use prism_quantity;
pub use prism_quantity::{Magnitude, Quantity, Unit, UnitRegistry};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// PRISM unit conversion - Python extension module
#[cfg(feature = "python")]
#[pymodule]
fn prism_units(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)
}
