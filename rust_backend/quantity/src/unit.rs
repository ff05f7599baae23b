//! Runtime unit descriptors.

use crate::dimension::{clamp, in_range, BaseDimension, Dimension};
use crate::error::{QuantityError, QuantityResult};
use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

/// A unit of measure resolved at runtime.
///
/// * `factor` is the multiplier from this unit to the SI coherent unit of the same dimension. Example: for
///   nanometres `factor == 1e-9` because `1 nm = 1e-9 m`; for `g/mol` it is `1e-3` (`kg/mol`).
/// * `dimension` ties the unit to its exponent vector.
/// * the printable symbol is kept as a list of `(symbol, exponent)` terms so that products and quotients print as
///   `kJ/mol` or `1/Å` instead of collapsing into base units.
///
/// # Invariants
///
/// - `factor` is finite and non-zero for every unit built from the registry.
/// - Only multiplicative units are modelled; offset scales (degree Celsius, Fahrenheit) are not.
///
/// ```rust
/// use prism_quantity::{Dimension, Unit};
///
/// let nm = Unit::new("nm", 1e-9, Dimension::LENGTH);
/// let angstrom = Unit::new("Å", 1e-10, Dimension::LENGTH);
/// assert!((nm.conversion_factor_to(&angstrom).unwrap() - 10.0).abs() < 1e-12);
/// assert_eq!(nm.recip().to_string(), "1/nm");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    factor: f64,
    dimension: Dimension,
    terms: Vec<(String, i8)>,
}

impl Unit {
    /// A single named unit.
    pub fn new(symbol: impl Into<String>, factor: f64, dimension: Dimension) -> Self {
        Self {
            factor,
            dimension,
            terms: vec![(symbol.into(), 1)],
        }
    }

    /// The pure number `1`.
    pub fn dimensionless() -> Self {
        Self {
            factor: 1.0,
            dimension: Dimension::DIMENSIONLESS,
            terms: Vec::new(),
        }
    }

    /// A dimensionless scale factor such as the `1000` in `1000*m`.
    pub fn scalar(factor: f64) -> Self {
        if factor == 1.0 {
            return Self::dimensionless();
        }
        Self::new(format!("{}", factor), factor, Dimension::DIMENSIONLESS)
    }

    /// The SI coherent unit for `dimension`, e.g. `kg*m^2/s^2` for energy.
    pub fn base_unit(dimension: Dimension) -> Self {
        Self {
            factor: 1.0,
            dimension,
            terms: dimension
                .iter()
                .map(|(b, e)| (b.base_symbol().to_string(), e))
                .collect(),
        }
    }

    /// Shorthand for the SI unit of a single base dimension.
    pub fn of_base(base: BaseDimension) -> Self {
        let mut exps = [0i8; 7];
        exps[base as usize] = 1;
        Self::base_unit(Dimension::new(
            exps[0], exps[1], exps[2], exps[3], exps[4], exps[5], exps[6],
        ))
    }

    /// Multiplier to the SI coherent unit.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Dimension of this unit.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// `true` for units of dimension one (including pure scale factors).
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Returns the same unit with a different symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.terms = vec![(symbol.into(), 1)];
        self
    }

    /// Printable symbol, e.g. `kJ/mol`. Empty for the pure number one.
    pub fn symbol(&self) -> String {
        let positive: Vec<String> = self
            .terms
            .iter()
            .filter(|(_, e)| *e > 0)
            .map(|(s, e)| format_term(s, e.unsigned_abs()))
            .collect();
        let negative: Vec<String> = self
            .terms
            .iter()
            .filter(|(_, e)| *e < 0)
            .map(|(s, e)| format_term(s, e.unsigned_abs()))
            .collect();

        let mut out = positive.join("*");
        if !negative.is_empty() {
            if out.is_empty() {
                out.push('1');
            }
            for term in negative {
                out.push('/');
                out.push_str(&term);
            }
        }
        out
    }

    /// Same dimension as `other`.
    #[inline]
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Same dimension and (to within rounding) the same factor.
    pub fn is_equivalent_to(&self, other: &Unit) -> bool {
        self.is_compatible_with(other)
            && (self.factor - other.factor).abs() <= 1e-12 * self.factor.abs().max(other.factor.abs())
    }

    /// Number that converts a magnitude in `self` to a magnitude in `target`.
    ///
    /// Fails with [`QuantityError::Dimensionality`] when the dimensions differ.
    pub fn conversion_factor_to(&self, target: &Unit) -> QuantityResult<f64> {
        if !self.is_compatible_with(target) {
            return Err(QuantityError::Dimensionality {
                from_unit: self.to_string(),
                from: self.dimension,
                to_unit: target.to_string(),
                to: target.dimension,
            });
        }
        Ok(self.factor / target.factor)
    }

    /// Raises the unit to an integer power.
    ///
    /// Fails with [`QuantityError::ExponentOverflow`] if an exponent leaves `-127..=127`.
    pub fn powi(&self, n: i8) -> QuantityResult<Self> {
        if n == 0 {
            return Ok(Self::dimensionless());
        }
        let overflow = || QuantityError::ExponentOverflow(format!("({})^{}", self, n));
        let dimension = self.dimension.checked_powi(n).ok_or_else(overflow)?;
        let terms = self
            .terms
            .iter()
            .map(|(s, e)| in_range(*e as i16 * n as i16).map(|e| (s.clone(), e)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(overflow)?;
        Ok(Self {
            factor: self.factor.powi(n as i32),
            dimension,
            terms,
        })
    }

    /// Multiplicative inverse.
    pub fn recip(&self) -> Self {
        Self {
            factor: 1.0 / self.factor,
            dimension: self.dimension.recip(),
            terms: self.terms.iter().map(|(s, e)| (s.clone(), -*e)).collect(),
        }
    }

    /// Product that fails instead of clamping when an exponent leaves `-127..=127`.
    pub fn checked_mul(&self, rhs: &Unit) -> QuantityResult<Self> {
        self.combine_with(rhs, 1, in_range, Dimension::checked_mul)
            .ok_or_else(|| QuantityError::ExponentOverflow(format!("{} * {}", self, rhs)))
    }

    /// Quotient that fails instead of clamping when an exponent leaves `-127..=127`.
    pub fn checked_div(&self, rhs: &Unit) -> QuantityResult<Self> {
        self.combine_with(rhs, -1, in_range, Dimension::checked_mul)
            .ok_or_else(|| QuantityError::ExponentOverflow(format!("{} / {}", self, rhs)))
    }

    /// Integer root of the unit.
    ///
    /// When the symbol terms do not divide evenly (`g/kJ` under a square root) but the dimension does, the result
    /// falls back to the SI coherent unit of the rooted dimension.
    pub fn root(&self, n: i8) -> QuantityResult<Self> {
        let dimension = self
            .dimension
            .root(n)
            .ok_or_else(|| QuantityError::NonIntegerPower {
                unit: self.to_string(),
                root: n,
            })?;
        let factor = self.factor.powf(1.0 / n as f64);

        if self.terms.iter().all(|(_, e)| e % n == 0) {
            let terms = self.terms.iter().map(|(s, e)| (s.clone(), e / n)).collect();
            return Ok(Self {
                factor,
                dimension,
                terms,
            });
        }

        // Fold the remaining scale into a leading numeric term.
        Ok(Unit::scalar(factor) * Self::base_unit(dimension))
    }

    /// Product (`sign = 1`) or quotient (`sign = -1`), clamping out-of-range exponents.
    fn combine(&self, rhs: &Unit, sign: i8) -> Self {
        let clamped = self.combine_with(
            rhs,
            sign,
            |e| Some(clamp(e)),
            |a, b| Some(Dimension::mul(a, b)),
        );
        // clamping never fails
        clamped.unwrap_or_else(Self::dimensionless)
    }

    fn combine_with(
        &self,
        rhs: &Unit,
        sign: i8,
        fit: fn(i16) -> Option<i8>,
        mul_dimension: fn(Dimension, Dimension) -> Option<Dimension>,
    ) -> Option<Self> {
        let mut terms = self.terms.clone();
        for (sym, exp) in &rhs.terms {
            let exp = *exp as i16 * sign as i16;
            match terms.iter_mut().find(|(s, _)| s == sym) {
                Some(term) => term.1 = fit(term.1 as i16 + exp)?,
                None => terms.push((sym.clone(), fit(exp)?)),
            }
        }
        terms.retain(|(_, e)| *e != 0);

        let (factor, rhs_dimension) = if sign > 0 {
            (self.factor * rhs.factor, rhs.dimension)
        } else {
            (self.factor / rhs.factor, rhs.dimension.recip())
        };

        Some(Self {
            factor,
            dimension: mul_dimension(self.dimension, rhs_dimension)?,
            terms,
        })
    }
}

fn format_term(symbol: &str, exp: u8) -> String {
    if exp == 1 {
        symbol.to_string()
    } else {
        format!("{}^{}", symbol, exp)
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::dimensionless()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let symbol = self.symbol();
        if symbol.is_empty() {
            f.write_str("dimensionless")
        } else {
            f.write_str(&symbol)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul<&Unit> for &Unit {
    type Output = Unit;
    #[inline]
    fn mul(self, rhs: &Unit) -> Unit {
        self.combine(rhs, 1)
    }
}

impl Mul for Unit {
    type Output = Unit;
    #[inline]
    fn mul(self, rhs: Unit) -> Unit {
        self.combine(&rhs, 1)
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;
    #[inline]
    fn div(self, rhs: &Unit) -> Unit {
        self.combine(rhs, -1)
    }
}

impl Div for Unit {
    type Output = Unit;
    #[inline]
    fn div(self, rhs: Unit) -> Unit {
        self.combine(&rhs, -1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn kj() -> Unit {
        Unit::new("kJ", 1e3, Dimension::ENERGY)
    }

    fn mol() -> Unit {
        Unit::new("mol", 1.0, Dimension::SUBSTANCE)
    }

    fn nm() -> Unit {
        Unit::new("nm", 1e-9, Dimension::LENGTH)
    }

    #[test]
    fn quotient_symbol_and_factor() {
        let molar = kj() / mol();
        assert_eq!(molar.symbol(), "kJ/mol");
        assert_relative_eq!(molar.factor(), 1e3);
        assert_eq!(molar.dimension(), Dimension::ENERGY / Dimension::SUBSTANCE);
    }

    #[test]
    fn same_symbol_terms_merge() {
        let area = &nm() * &nm();
        assert_eq!(area.symbol(), "nm^2");
        assert!((area.clone() / nm() / nm()).is_dimensionless());
        assert_eq!((area / nm() / nm()).symbol(), "");
    }

    #[test]
    fn reciprocal_prints_leading_one() {
        assert_eq!(nm().recip().symbol(), "1/nm");
        assert_eq!(nm().powi(-3).unwrap().symbol(), "1/nm^3");
    }

    #[test]
    fn incompatible_conversion_fails() {
        let err = nm().conversion_factor_to(&mol()).unwrap_err();
        assert!(matches!(err, QuantityError::Dimensionality { .. }));
    }

    #[test]
    fn base_unit_symbols() {
        assert_eq!(Unit::base_unit(Dimension::ENERGY).symbol(), "m^2*kg/s^2");
        assert_eq!(Unit::of_base(BaseDimension::Mass).symbol(), "kg");
    }

    #[test]
    fn root_of_square() {
        let r = nm().powi(2).unwrap().root(2).unwrap();
        assert_eq!(r.symbol(), "nm");
        assert_relative_eq!(r.factor(), 1e-9, max_relative = 1e-12);
        assert!(nm().root(2).is_err());
    }

    #[test]
    fn root_falls_back_to_base_unit() {
        let g = Unit::new("g", 1e-3, Dimension::MASS);
        let inner = &(&g / &kj()) * &nm().powi(2).unwrap();
        let r = inner.root(2).unwrap();
        assert_eq!(r.dimension(), Dimension::TIME);
        assert_relative_eq!(r.factor(), (1e-3 / 1e3 * 1e-18f64).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn powi_out_of_range_is_an_error() {
        let inv = nm().powi(-64).unwrap();
        let err = inv.powi(2).unwrap_err();
        assert!(matches!(err, QuantityError::ExponentOverflow(_)));
        // formatting the operands must not overflow either
        assert!(err.to_string().contains("1/nm^64"), "{err}");
    }

    #[test]
    fn checked_products_report_overflow() {
        let big = nm().powi(100).unwrap();
        assert!(matches!(big.checked_mul(&big), Err(QuantityError::ExponentOverflow(_))));
        let small = nm().powi(-100).unwrap();
        assert!(matches!(big.checked_div(&small), Err(QuantityError::ExponentOverflow(_))));
        assert!(big.checked_div(&big).unwrap().is_dimensionless());
    }

    #[test]
    fn clamped_operators_do_not_panic_when_printed() {
        let big = nm().powi(100).unwrap();
        let clamped = &big * &big;
        assert_eq!(clamped.symbol(), "nm^127");
        assert_eq!(clamped.recip().symbol(), "1/nm^127");
    }

    #[test]
    fn display_dimensionless() {
        assert_eq!(Unit::dimensionless().to_string(), "dimensionless");
    }
}
