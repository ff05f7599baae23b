//! API registration helpers.

use pyo3::prelude::*;

use crate::api::types as api;

/// Register all API classes with the Python module.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::PyUnitConverter>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
