use std::ops::Mul;
use derive_more::Display;
use crate::{HasOne, Invertible, MulGroup, MulMonoid, MulMonoidWithUnits, MulOps, MulSemigroup};

/// An element paired with its precomputed multiplicative inverse.
///
/// `value * reciprocal == one` is trusted, not checked. Trusted callers build
/// one with `new_unchecked`; others ask the type via `Unit::of`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[display("{value}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit<T> {
    value: T,
    reciprocal: T
}

impl<T> Unit<T> {
    pub fn new_unchecked(value: T, reciprocal: T) -> Self {
        Self { value, reciprocal }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn reciprocal(&self) -> &T {
        &self.reciprocal
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_reciprocal(self) -> T {
        self.reciprocal
    }

    pub fn into_parts(self) -> (T, T) {
        (self.value, self.reciprocal)
    }

    /// The unit `(reciprocal, value)`.
    pub fn flip(self) -> Self {
        Self { value: self.reciprocal, reciprocal: self.value }
    }
}

impl<T> Unit<T>
where T: MulMonoidWithUnits {
    /// `None` if `value` is not invertible in `T`.
    pub fn of(value: T) -> Option<Self> {
        value.unit()
    }
}

impl<T> Invertible for Unit<T>
where T: MulOps {
    type Elem = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn reciprocal(&self) -> &T {
        &self.reciprocal
    }
}

// Units form a group: (a, a⁻¹)(b, b⁻¹) = (ab, b⁻¹a⁻¹).

impl<T> Mul for Unit<T>
where T: MulOps {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            reciprocal: rhs.reciprocal * self.reciprocal
        }
    }
}

impl<T> HasOne for Unit<T>
where T: HasOne {
    fn one() -> Self {
        Self::new_unchecked(T::one(), T::one())
    }

    fn is_one(&self) -> bool {
        self.value.is_one()
    }
}

crate::impl_mul_fold!([T: MulOps] Unit<T>);

impl<T> MulSemigroup for Unit<T> where T: MulSemigroup {}
impl<T> MulMonoid for Unit<T> where T: MulMonoid {}

crate::impl_div_op!([T: MulMonoid + Clone] Unit<T>);

impl<T> MulGroup for Unit<T>
where T: MulMonoid + Clone {
    fn inv(&self) -> Self {
        self.clone().flip()
    }
}
