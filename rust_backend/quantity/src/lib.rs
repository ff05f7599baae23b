//! Runtime-checked physical quantities.
//!
//! `prism-quantity` provides the unit algebra behind reduced-unit conversion:
//!
//! - A [`Dimension`] is an exponent vector over the seven SI base dimensions.
//! - A [`Unit`] is a conversion factor to SI coherent units, a dimension and a printable symbol.
//! - A [`Quantity<M>`] is a magnitude (`f64` or an array, see [`Magnitude`]) tagged with a unit.
//! - A [`UnitRegistry`] turns strings such as `"kilojoule/mole"` or `"1/angstrom"` into units.
//!
//! Units are only known at runtime (they come from user input and configuration files), so dimensional consistency
//! is checked when quantities are converted or added, and violations surface as
//! [`QuantityError::Dimensionality`] instead of silently wrong numbers.
//!
//! # Quick start
//!
//! ```rust
//! use prism_quantity::UnitRegistry;
//!
//! let ureg = UnitRegistry::global();
//! let dc = ureg.quantity(1.0, "nanometer").unwrap();
//! let q = (0.01 / dc).to_expr("1/angstrom").unwrap();
//! assert!((q.value() - 0.001).abs() < 1e-12);
//!
//! let err = ureg.quantity(1.0, "nm").unwrap().to_expr("kelvin");
//! assert!(err.is_err());
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Offset temperature scales (°C, °F); kelvin is the only temperature unit.
//! - Symbolic simplification of unit symbols: `kJ/mol/K*K` prints as `kJ/mol` but `nm/m` stays `nm/m`.
//! - Exact arithmetic (magnitudes are `f64`).
//!
//! # Feature flags
//!
//! - `serde`: `Quantity<M>` (de)serializes as `{"value": ..., "unit": "kJ/mol"}`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod magnitude;
mod quantity;
mod registry;
mod unit;

pub mod constants;
pub mod units;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension};
pub use error::{QuantityError, QuantityResult};
pub use magnitude::Magnitude;
pub use quantity::Quantity;
pub use registry::UnitRegistry;
pub use unit::Unit;
