use std::any::type_name;
use log::trace;
use crate::{AddGroup, HasOne, Invertible, MulMonoidWithUnits, NonEmpty, Ring, DivisionByNonUnit};

// Modules over a ring of scalars.
//
// Linear combinations are sums, so they go through the `AddFold` witness of
// the module type.

pub trait LeftModule: AddGroup {
    type Scalar: Ring;

    fn left_scaled(self, r: &Self::Scalar) -> Self;

    fn linear_combination(terms: NonEmpty<(Self::Scalar, Self)>) -> Self {
        terms.map_and_sum(|(r, x)| x.left_scaled(&r))
    }

    /// `None` for no terms.
    fn linear_combination_of<I>(terms: I) -> Option<Self>
    where I: IntoIterator<Item = (Self::Scalar, Self)> {
        let itr = terms.into_iter().map(|(r, x)| x.left_scaled(&r));
        Self::sum_result(itr).ok()
    }

    /// Zero for no terms.
    fn weighted_sum<I>(terms: I) -> Self
    where I: IntoIterator<Item = (Self::Scalar, Self)> {
        Self::sum(terms.into_iter().map(|(r, x)| x.left_scaled(&r)))
    }

    fn scaled_down(self, r: &Self::Scalar) -> Result<Self, DivisionByNonUnit>
    where Self::Scalar: MulMonoidWithUnits {
        match r.unit() {
            Some(u) => Ok(self.left_scaled(u.reciprocal())),
            None => {
                trace!("division by non-unit scalar: {}", type_name::<Self::Scalar>());
                Err(DivisionByNonUnit::new())
            }
        }
    }

    fn scaled_down_by_unit<W>(self, w: &W) -> Self
    where W: Invertible<Elem = Self::Scalar> {
        self.left_scaled(w.reciprocal())
    }

    fn scaled_one(r: &Self::Scalar) -> Self
    where Self: HasOne {
        Self::one().left_scaled(r)
    }
}

pub trait RightModule: AddGroup {
    type Scalar: Ring;

    fn right_scaled(self, r: &Self::Scalar) -> Self;

    fn right_linear_combination(terms: NonEmpty<(Self, Self::Scalar)>) -> Self {
        terms.map_and_sum(|(x, r)| x.right_scaled(&r))
    }

    fn right_linear_combination_of<I>(terms: I) -> Option<Self>
    where I: IntoIterator<Item = (Self, Self::Scalar)> {
        let itr = terms.into_iter().map(|(x, r)| x.right_scaled(&r));
        Self::sum_result(itr).ok()
    }

    fn right_weighted_sum<I>(terms: I) -> Self
    where I: IntoIterator<Item = (Self, Self::Scalar)> {
        Self::sum(terms.into_iter().map(|(x, r)| x.right_scaled(&r)))
    }

    fn right_scaled_down(self, r: &Self::Scalar) -> Result<Self, DivisionByNonUnit>
    where Self::Scalar: MulMonoidWithUnits {
        match r.unit() {
            Some(u) => Ok(self.right_scaled(u.reciprocal())),
            None => {
                trace!("division by non-unit scalar: {}", type_name::<Self::Scalar>());
                Err(DivisionByNonUnit::new())
            }
        }
    }

    fn right_scaled_down_by_unit<W>(self, w: &W) -> Self
    where W: Invertible<Elem = Self::Scalar> {
        self.right_scaled(w.reciprocal())
    }

    fn right_scaled_one(r: &Self::Scalar) -> Self
    where Self: HasOne {
        Self::one().right_scaled(r)
    }
}

/// Marker: left and right actions are compatible, `(r x) s == r (x s)`.
pub trait Bimodule:
    LeftModule +
    RightModule
{}
