use std::any::type_name;
use log::trace;
use crate::{MulMonoid, MulCommMonoid, MulOps, Unit, ReciprocalUnavailable, DivisionByNonUnit};

/// Proof that a specific element is multiplicatively invertible.
///
/// `value * reciprocal == one` is trusted, not verified.
pub trait Invertible {
    type Elem: MulOps;
    fn value(&self) -> &Self::Elem;
    fn reciprocal(&self) -> &Self::Elem;
}

/// A monoid in which some elements are units. Reciprocal and division are
/// partial, and fail with a typed error on non-units.
pub trait MulMonoidWithUnits: MulMonoid {
    /// The unit witness of `self`, or `None` if `self` is not invertible.
    /// The type decides its own invertible set.
    fn unit(&self) -> Option<Unit<Self>>;

    fn is_unit(&self) -> bool {
        self.unit().is_some()
    }

    fn reciprocal(&self) -> Result<Self, ReciprocalUnavailable> {
        match self.unit() {
            Some(u) => Ok(u.into_reciprocal()),
            None => {
                trace!("no reciprocal: {}", type_name::<Self>());
                Err(ReciprocalUnavailable::new())
            }
        }
    }

    fn divided_by(self, divisor: &Self) -> Result<Self, DivisionByNonUnit> {
        match divisor.unit() {
            Some(u) => Ok(self * u.into_reciprocal()),
            None => {
                trace!("division by non-unit: {}", type_name::<Self>());
                Err(DivisionByNonUnit::new())
            }
        }
    }

    /// Total: the divisor is already proven invertible.
    fn divided_by_unit<W>(self, divisor: &W) -> Self
    where W: Invertible<Elem = Self>, Self: Clone {
        self * divisor.reciprocal().clone()
    }
}

pub trait MulCommMonoidWithUnits:
    MulMonoidWithUnits +
    MulCommMonoid
{}
