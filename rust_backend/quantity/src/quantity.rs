//! Quantity type and its implementations.

use crate::dimension::Dimension;
use crate::error::{QuantityError, QuantityResult};
use crate::magnitude::Magnitude;
use crate::registry::UnitRegistry;
use crate::unit::Unit;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul, Neg};

/// A magnitude tagged with a runtime [`Unit`].
///
/// `Quantity<M>` pairs a scalar (`f64`, the default) or an array magnitude with the unit it is expressed in.
/// Multiplication and division compose units; addition, subtraction and conversion check that dimensions agree and
/// fail with [`QuantityError::Dimensionality`] otherwise.
///
/// # Examples
///
/// ```rust
/// use prism_quantity::{Quantity, UnitRegistry};
///
/// let ureg = UnitRegistry::global();
/// let ec = ureg.quantity(2.48, "kilojoule/mole").unwrap();
/// let temperature = (1.25 * ec) / (ureg.quantity(1.0, "k_B").unwrap() * ureg.quantity(1.0, "N_A").unwrap());
/// let kelvin = temperature.to(&ureg.parse_unit("kelvin").unwrap()).unwrap();
/// assert!((kelvin.value() - 372.84).abs() < 0.01);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Quantity<M: Magnitude = f64> {
    value: M,
    unit: Unit,
}

impl<M: Magnitude> Quantity<M> {
    /// Creates a quantity from a magnitude and a unit.
    #[inline]
    pub fn new(value: M, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a dimensionless quantity.
    #[inline]
    pub fn dimensionless(value: M) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    /// Returns a copy of the magnitude.
    #[inline]
    pub fn value(&self) -> M {
        self.value.clone()
    }

    /// Borrows the magnitude.
    #[inline]
    pub fn magnitude(&self) -> &M {
        &self.value
    }

    /// Consumes the quantity, returning the magnitude.
    #[inline]
    pub fn into_value(self) -> M {
        self.value
    }

    /// The unit the magnitude is expressed in.
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension of the unit.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// `true` if `other` can be converted into this quantity's unit.
    #[inline]
    pub fn is_compatible_with<N: Magnitude>(&self, other: &Quantity<N>) -> bool {
        self.unit.is_compatible_with(&other.unit)
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use prism_quantity::UnitRegistry;
    ///
    /// let ureg = UnitRegistry::global();
    /// let d = ureg.quantity(1.0, "nm").unwrap();
    /// let a = d.to(&ureg.parse_unit("angstrom").unwrap()).unwrap();
    /// assert!((a.value() - 10.0).abs() < 1e-12);
    /// ```
    pub fn to(&self, target: &Unit) -> QuantityResult<Quantity<M>> {
        let k = self.unit.conversion_factor_to(target)?;
        Ok(Quantity::new(self.value.map(|v| v * k), target.clone()))
    }

    /// Converts to a unit given as an expression, resolved by [`UnitRegistry::global`].
    pub fn to_expr(&self, expr: &str) -> QuantityResult<Quantity<M>> {
        let target = UnitRegistry::global().parse_unit(expr)?;
        self.to(&target)
    }

    /// Magnitude expressed in `target`.
    pub fn magnitude_in(&self, target: &Unit) -> QuantityResult<M> {
        self.to(target).map(Quantity::into_value)
    }

    /// Converts to the SI coherent unit of this quantity's dimension.
    pub fn to_base(&self) -> Quantity<M> {
        let k = self.unit.factor();
        Quantity::new(
            self.value.map(|v| v * k),
            Unit::base_unit(self.unit.dimension()),
        )
    }

    /// Collapses a dimensionless quantity into its plain magnitude (`nm/Å` becomes `10`).
    pub fn to_number(&self) -> QuantityResult<M> {
        self.magnitude_in(&Unit::dimensionless())
    }

    /// Adds `other`, converted into this quantity's unit.
    pub fn try_add(&self, other: &Quantity<M>) -> QuantityResult<Quantity<M>> {
        let rhs = other.to(&self.unit)?;
        let value = self.value.zip_with(&rhs.value, |a, b| a + b)?;
        Ok(Quantity::new(value, self.unit.clone()))
    }

    /// Subtracts `other`, converted into this quantity's unit.
    pub fn try_sub(&self, other: &Quantity<M>) -> QuantityResult<Quantity<M>> {
        let rhs = other.to(&self.unit)?;
        let value = self.value.zip_with(&rhs.value, |a, b| a - b)?;
        Ok(Quantity::new(value, self.unit.clone()))
    }

    /// Raises to an integer power.
    pub fn powi(&self, n: i8) -> QuantityResult<Quantity<M>> {
        let unit = self.unit.powi(n)?;
        Ok(Quantity::new(self.value.map(|v| v.powi(n as i32)), unit))
    }

    /// Square root; the unit's dimension must have even exponents.
    pub fn sqrt(&self) -> QuantityResult<Quantity<M>> {
        let unit = self.unit.root(2)?;
        Ok(Quantity::new(self.value.map(f64::sqrt), unit))
    }

    /// Multiplicative inverse.
    pub fn recip(&self) -> Quantity<M> {
        Quantity::new(self.value.map(|v| 1.0 / v), self.unit.recip())
    }

    /// Applies `f` to every element of the magnitude, keeping the unit.
    pub fn map_value<F: Fn(f64) -> f64>(&self, f: F) -> Quantity<M> {
        Quantity::new(self.value.map(f), self.unit.clone())
    }
}

impl Quantity<f64> {
    /// `true` if the magnitude is finite and strictly positive.
    #[inline]
    pub fn is_positive_finite(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Scales this quantity by a magnitude of any shape, giving `x * self`.
    pub fn scale<N: Magnitude>(&self, x: N) -> Quantity<N> {
        let s = self.value;
        Quantity::new(x.map(|v| v * s), self.unit.clone())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<M: Magnitude> Mul<f64> for Quantity<M> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Quantity::new(self.value.map(|v| v * rhs), self.unit)
    }
}

impl<M: Magnitude> Mul<Quantity<M>> for f64 {
    type Output = Quantity<M>;
    #[inline]
    fn mul(self, rhs: Quantity<M>) -> Quantity<M> {
        rhs * self
    }
}

impl<M: Magnitude> Div<f64> for Quantity<M> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Quantity::new(self.value.map(|v| v / rhs), self.unit)
    }
}

impl<M: Magnitude> Div<Quantity<M>> for f64 {
    type Output = Quantity<M>;
    #[inline]
    fn div(self, rhs: Quantity<M>) -> Quantity<M> {
        Quantity::new(rhs.value.map(|v| self / v), rhs.unit.recip())
    }
}

impl<M: Magnitude> Mul<Quantity<f64>> for Quantity<M> {
    type Output = Quantity<M>;
    #[inline]
    fn mul(self, rhs: Quantity<f64>) -> Quantity<M> {
        let s = rhs.value;
        Quantity::new(self.value.map(|v| v * s), &self.unit * &rhs.unit)
    }
}

impl<M: Magnitude> Mul<&Quantity<f64>> for &Quantity<M> {
    type Output = Quantity<M>;
    #[inline]
    fn mul(self, rhs: &Quantity<f64>) -> Quantity<M> {
        let s = rhs.value;
        Quantity::new(self.value.map(|v| v * s), &self.unit * &rhs.unit)
    }
}

impl<M: Magnitude> Div<Quantity<f64>> for Quantity<M> {
    type Output = Quantity<M>;
    #[inline]
    fn div(self, rhs: Quantity<f64>) -> Quantity<M> {
        let s = rhs.value;
        Quantity::new(self.value.map(|v| v / s), &self.unit / &rhs.unit)
    }
}

impl<M: Magnitude> Div<&Quantity<f64>> for &Quantity<M> {
    type Output = Quantity<M>;
    #[inline]
    fn div(self, rhs: &Quantity<f64>) -> Quantity<M> {
        let s = rhs.value;
        Quantity::new(self.value.map(|v| v / s), &self.unit / &rhs.unit)
    }
}

impl<M: Magnitude> Neg for Quantity<M> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quantity::new(self.value.map(|v| -v), self.unit)
    }
}

impl From<f64> for Quantity<f64> {
    #[inline]
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

fn write_unit(f: &mut Formatter<'_>, unit: &Unit) -> Result {
    let symbol = unit.symbol();
    if symbol.is_empty() {
        Ok(())
    } else {
        write!(f, " {}", symbol)
    }
}

impl Display for Quantity<f64> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        write_unit(f, &self.unit)
    }
}

impl Display for Quantity<Vec<f64>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("[")?;
        for (i, v) in self.value.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        f.write_str("]")?;
        write_unit(f, &self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes as `{"value": ..., "unit": "kJ/mol"}`; the unit is parsed back with [`UnitRegistry::global`].
#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize)]
    struct QuantityRef<'a, M> {
        value: &'a M,
        unit: String,
    }

    #[derive(Deserialize)]
    struct QuantityRepr<M> {
        value: M,
        #[serde(default)]
        unit: String,
    }

    impl<M: Magnitude + Serialize> Serialize for Quantity<M> {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            QuantityRef {
                value: &self.value,
                unit: self.unit.symbol(),
            }
            .serialize(serializer)
        }
    }

    impl<'de, M: Magnitude + Deserialize<'de>> Deserialize<'de> for Quantity<M> {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let repr = QuantityRepr::<M>::deserialize(deserializer)?;
            let unit = UnitRegistry::global()
                .parse_unit(&repr.unit)
                .map_err(de::Error::custom)?;
            Ok(Quantity::new(repr.value, unit))
        }
    }
}
