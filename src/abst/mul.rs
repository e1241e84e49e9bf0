use std::any::type_name;
use std::iter;
use std::ops::{Div, Mul};
use log::trace;
use crate::{HasOne, NonEmpty, EmptyCollection};

// Multiplicative structures

/// Binary contract: `T * T -> T`.
pub trait MulOps:
    Sized +
    Mul<Output = Self>
{}

impl<T> MulOps for T where T: Mul<Output = T> {}

/// Fold contract: a direct n-ary product over a non-empty sequence.
/// See `AddFold`.
pub trait MulFold: Sized {
    fn product_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self>;
}

/// Left fold of `*`, starting from `first`.
pub fn fold_by_mul<T, I>(first: T, rest: I) -> T
where T: MulOps, I: IntoIterator<Item = T> {
    rest.into_iter().fold(first, |res, a| res * a)
}

/// `lhs * rhs` computed by the fold witness on `[lhs, rhs]`.
pub fn mul_by_fold<T>(lhs: T, rhs: T) -> T
where T: MulFold {
    T::product_of(lhs, iter::once(rhs))
}

pub trait MulSemigroup:
    MulOps +
    MulFold
{
    fn product_nonempty(values: NonEmpty<Self>) -> Self {
        let (head, tail) = values.into_parts();
        Self::product_of(head, tail)
    }

    fn product_result<I>(itr: I) -> Result<Self, EmptyCollection>
    where I: IntoIterator<Item = Self> {
        let mut itr = itr.into_iter();
        match itr.next() {
            Some(first) => Ok(Self::product_of(first, itr)),
            None => {
                trace!("product of empty sequence: {}", type_name::<Self>());
                Err(EmptyCollection::new())
            }
        }
    }
}

pub trait MulCommSemigroup: MulSemigroup {}

pub trait MulMonoid:
    MulSemigroup +
    HasOne
{
    fn product<I>(itr: I) -> Self
    where I: IntoIterator<Item = Self> {
        let mut itr = itr.into_iter();
        match itr.next() {
            Some(first) => Self::product_of(first, itr),
            None => Self::one()
        }
    }
}

pub trait MulCommMonoid:
    MulMonoid +
    MulCommSemigroup
{}

/// Every element is invertible. Only valid for carriers that exclude
/// non-units (e.g. zero); see `MulMonoidWithUnits` for the partial case.
pub trait MulGroup:
    MulMonoid +
    Div<Output = Self>
{
    fn inv(&self) -> Self;
}

pub trait MulCommGroup:
    MulGroup +
    MulCommMonoid
{}
