//! # API Module
//!
//! Python entry point, compiled only with the `python` cargo feature. The
//! classes here mirror the notebook-facing interface (`toKelvin`,
//! `toInvAngstrom`, `dc`, ...) and accept either a float or a list of floats.
//!
//! - [`types`]: `#[pyclass]` wrappers around the Rust converter
//! - [`registration`]: adds the classes to the `prism_units` module

pub mod registration;
pub mod types;

pub use registration::register_api_functions;
pub use types::*;

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

use crate::error::UnitConverterError;

impl From<UnitConverterError> for PyErr {
    fn from(e: UnitConverterError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}
