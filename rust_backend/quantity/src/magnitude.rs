//! Scalar and array magnitudes.

use crate::error::{QuantityError, QuantityResult};
use core::fmt::Debug;

/// Numeric payload of a [`Quantity`](crate::Quantity): a single `f64` or an array of them.
///
/// Every operation on a quantity is applied element-wise through [`Magnitude::map`] and [`Magnitude::zip_with`], so
/// array inputs come back with the same shape as they went in.
pub trait Magnitude: Clone + Debug + PartialEq {
    /// Applies `f` to every element.
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self;

    /// Combines two magnitudes element-wise.
    ///
    /// Fails with [`QuantityError::ShapeMismatch`] when array lengths differ.
    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> QuantityResult<Self>;

    /// Number of elements (`1` for scalars).
    fn len(&self) -> usize;

    /// `true` for an empty array.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the elements into a vector.
    fn to_vec(&self) -> Vec<f64>;
}

impl Magnitude for f64 {
    #[inline]
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        f(*self)
    }

    #[inline]
    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> QuantityResult<Self> {
        Ok(f(*self, *other))
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    fn to_vec(&self) -> Vec<f64> {
        vec![*self]
    }
}

impl Magnitude for Vec<f64> {
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        self.iter().map(|v| f(*v)).collect()
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> QuantityResult<Self> {
        if self.len() != other.len() {
            return Err(QuantityError::ShapeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.iter().zip(other).map(|(a, b)| f(*a, *b)).collect())
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn to_vec(&self) -> Vec<f64> {
        self.clone()
    }
}

impl<const N: usize> Magnitude for [f64; N] {
    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        let mut out = *self;
        for v in out.iter_mut() {
            *v = f(*v);
        }
        out
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> QuantityResult<Self> {
        let mut out = *self;
        for (v, o) in out.iter_mut().zip(other) {
            *v = f(*v, *o);
        }
        Ok(out)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}
