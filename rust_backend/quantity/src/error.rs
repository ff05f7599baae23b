//! Error types for unit algebra and unit parsing.

use crate::Dimension;

/// Result type for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// Two operands (or a value and a target unit) have different dimensions.
    #[error("cannot convert from '{from_unit}' ({from}) to '{to_unit}' ({to})")]
    Dimensionality {
        /// Symbol of the source unit.
        from_unit: String,
        /// Dimension of the source unit.
        from: Dimension,
        /// Symbol of the target unit.
        to_unit: String,
        /// Dimension of the target unit.
        to: Dimension,
    },

    /// A unit name is not in the registry.
    #[error("'{0}' is not defined in the unit registry")]
    UnknownUnit(String),

    /// A unit expression is malformed.
    #[error("invalid unit expression '{expr}' at position {position}: {message}")]
    Parse {
        /// The full expression being parsed.
        expr: String,
        /// Byte offset of the offending token.
        position: usize,
        /// What went wrong.
        message: String,
    },

    /// Element-wise operation on arrays of different length.
    #[error("shape mismatch: {left} vs {right} elements")]
    ShapeMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A root was requested on a unit whose exponents are not divisible.
    #[error("cannot take root {root} of '{unit}'")]
    NonIntegerPower {
        /// Symbol of the unit.
        unit: String,
        /// Requested root.
        root: i8,
    },

    /// An exponent left the supported range `-127..=127`.
    #[error("exponent out of range in '{0}'")]
    ExponentOverflow(String),

    /// A unit name collides with an existing registry entry.
    #[error("unit '{0}' is already defined")]
    DuplicateUnit(String),
}
