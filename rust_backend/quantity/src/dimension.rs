//! Dimension vectors.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Div, Mul};

/// The seven SI base dimensions, in the order used by [`Dimension`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// `[length]`, canonical unit metre.
    Length,
    /// `[mass]`, canonical unit kilogram.
    Mass,
    /// `[time]`, canonical unit second.
    Time,
    /// `[current]`, canonical unit ampere.
    Current,
    /// `[temperature]`, canonical unit kelvin.
    Temperature,
    /// `[substance]`, canonical unit mole.
    Substance,
    /// `[luminosity]`, canonical unit candela.
    Luminosity,
}

impl BaseDimension {
    /// All base dimensions in vector order.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::Luminosity,
    ];

    /// Name shown inside brackets, e.g. `length`.
    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Substance => "substance",
            BaseDimension::Luminosity => "luminosity",
        }
    }

    /// Symbol of the SI coherent unit for this dimension.
    pub const fn base_symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Substance => "mol",
            BaseDimension::Luminosity => "cd",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Physical dimension as a vector of integer exponents over the SI base dimensions.
///
/// Two quantities can only be added, compared or converted into each other when their dimensions are equal.
/// Multiplying quantities adds exponents; dividing subtracts them.
///
/// ```rust
/// use prism_quantity::Dimension;
///
/// let energy = Dimension::MASS * Dimension::LENGTH.powi(2) / Dimension::TIME.powi(2);
/// assert_eq!(energy, Dimension::ENERGY);
/// assert!((energy / Dimension::ENERGY).is_dimensionless());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension([i8; 7]);

impl Dimension {
    /// No dimension at all.
    pub const DIMENSIONLESS: Self = Self([0; 7]);
    /// `[length]`
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// `[mass]`
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// `[time]`
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// `[current]`
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// `[temperature]`
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// `[substance]`
    pub const SUBSTANCE: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// `[luminosity]`
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);
    /// `[mass] * [length] ** 2 / [time] ** 2`
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0);

    /// Builds a dimension from exponents in [`BaseDimension::ALL`] order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        substance: i8,
        luminosity: i8,
    ) -> Self {
        Self([length, mass, time, current, temperature, substance, luminosity])
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Dimension product, usable in `const` context.
    ///
    /// Exponents are clamped to `-127..=127`; use [`Dimension::checked_mul`] when the operands come from user input.
    pub const fn mul(self, rhs: Self) -> Self {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = clamp(self.0[i] as i16 + rhs.0[i] as i16);
            i += 1;
        }
        Self(out)
    }

    /// Dimension quotient, usable in `const` context.
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    /// Multiplicative inverse (all exponents negated).
    pub const fn recip(self) -> Self {
        self.powi(-1)
    }

    /// Raises every exponent by `n`, clamping like [`Dimension::mul`].
    pub const fn powi(self, n: i8) -> Self {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = clamp(self.0[i] as i16 * n as i16);
            i += 1;
        }
        Self(out)
    }

    /// Product, or `None` if an exponent leaves `-127..=127`.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        let mut out = [0i8; 7];
        for (i, e) in out.iter_mut().enumerate() {
            *e = in_range(self.0[i] as i16 + rhs.0[i] as i16)?;
        }
        Some(Self(out))
    }

    /// Quotient, or `None` if an exponent leaves `-127..=127`.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs.checked_powi(-1)?)
    }

    /// Power, or `None` if an exponent leaves `-127..=127`.
    pub fn checked_powi(self, n: i8) -> Option<Self> {
        let mut out = [0i8; 7];
        for (i, e) in out.iter_mut().enumerate() {
            *e = in_range(self.0[i] as i16 * n as i16)?;
        }
        Some(Self(out))
    }

    /// Integer root, if every exponent is divisible by `n`.
    pub fn root(self, n: i8) -> Option<Self> {
        if n == 0 || self.0.iter().any(|e| e % n != 0) {
            return None;
        }
        let mut out = self.0;
        for e in out.iter_mut() {
            *e /= n;
        }
        Some(Self(out))
    }

    /// Iterates the non-zero `(base, exponent)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, i8)> + '_ {
        BaseDimension::ALL
            .iter()
            .map(move |b| (*b, self.exponent(*b)))
            .filter(|(_, e)| *e != 0)
    }
}

/// Largest exponent magnitude; `i8::MIN` is excluded so negation never overflows.
pub(crate) const MAX_EXPONENT: i16 = i8::MAX as i16;

pub(crate) const fn clamp(e: i16) -> i8 {
    if e > MAX_EXPONENT {
        MAX_EXPONENT as i8
    } else if e < -MAX_EXPONENT {
        -MAX_EXPONENT as i8
    } else {
        e as i8
    }
}

pub(crate) fn in_range(e: i16) -> Option<i8> {
    (-MAX_EXPONENT..=MAX_EXPONENT).contains(&e).then_some(e as i8)
}

impl Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dimension::mul(self, rhs)
    }
}

impl Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Dimension::div(self, rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("dimensionless");
        }

        let mut first = true;
        for (base, exp) in self.iter().filter(|(_, e)| *e > 0) {
            if !first {
                f.write_str(" * ")?;
            }
            first = false;
            write!(f, "[{}]", base.name())?;
            if exp != 1 {
                write!(f, " ** {}", exp)?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        for (base, exp) in self.iter().filter(|(_, e)| *e < 0) {
            write!(f, " / [{}]", base.name())?;
            if exp != -1 {
                write!(f, " ** {}", exp.unsigned_abs())?;
            }
        }
        Ok(())
    }
}
