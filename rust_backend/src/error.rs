//! Error types for unit conversion.

use prism_quantity::QuantityError;

/// Result type for converter operations
pub type ConverterResult<T> = Result<T, UnitConverterError>;

/// Error type for converter operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitConverterError {
    /// A unit string could not be resolved by the unit registry.
    #[error("Invalid unit '{unit}': {reason}")]
    InvalidUnitError { unit: String, reason: String },

    /// A characteristic magnitude is zero, negative or not finite.
    #[error("Invalid scale: characteristic {name} must be positive and finite, got {value}")]
    InvalidScaleError { name: String, value: f64 },

    /// Quantities of incompatible dimensions were combined or converted.
    #[error("Dimensionality error: {0}")]
    DimensionalityError(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl UnitConverterError {
    /// Wraps a registry failure for `unit`, keeping the full expression in the message.
    pub fn invalid_unit(unit: &str, source: QuantityError) -> Self {
        UnitConverterError::InvalidUnitError {
            unit: unit.to_string(),
            reason: source.to_string(),
        }
    }

    /// Rejects the characteristic `name` with magnitude `value`.
    pub fn invalid_scale(name: &str, value: f64) -> Self {
        UnitConverterError::InvalidScaleError {
            name: name.to_string(),
            value,
        }
    }
}

impl From<QuantityError> for UnitConverterError {
    fn from(e: QuantityError) -> Self {
        match e {
            QuantityError::UnknownUnit(ref name) => UnitConverterError::InvalidUnitError {
                unit: name.clone(),
                reason: e.to_string(),
            },
            QuantityError::Parse { ref expr, .. }
            | QuantityError::DuplicateUnit(ref expr)
            | QuantityError::ExponentOverflow(ref expr) => {
                UnitConverterError::InvalidUnitError {
                    unit: expr.clone(),
                    reason: e.to_string(),
                }
            }
            QuantityError::Dimensionality { .. }
            | QuantityError::NonIntegerPower { .. }
            | QuantityError::ShapeMismatch { .. } => {
                UnitConverterError::DimensionalityError(e.to_string())
            }
        }
    }
}
