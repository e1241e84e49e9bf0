use std::any::type_name;
use std::iter;
use std::ops::{Add, Neg, Sub};
use log::trace;
use crate::{HasZero, NonEmpty, EmptyCollection};

// Additive structures

/// Binary contract: `T + T -> T`.
pub trait AddOps:
    Sized +
    Add<Output = Self>
{}

impl<T> AddOps for T where T: Add<Output = T> {}

/// Fold contract: a direct n-ary sum over a non-empty sequence, given as the
/// first element and the (possibly empty) rest.
///
/// A hand-written witness need not be repeated `+`; every sum entry point of
/// this crate calls it exactly once over its whole input. Agreement with `+`
/// is the implementor's responsibility and is never checked.
pub trait AddFold: Sized {
    fn sum_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self>;
}

/// Left fold of `+`, starting from `first`.
pub fn fold_by_add<T, I>(first: T, rest: I) -> T
where T: AddOps, I: IntoIterator<Item = T> {
    rest.into_iter().fold(first, |res, a| res + a)
}

/// `lhs + rhs` computed by the fold witness on `[lhs, rhs]`.
pub fn add_by_fold<T>(lhs: T, rhs: T) -> T
where T: AddFold {
    T::sum_of(lhs, iter::once(rhs))
}

/// Both contracts, by declaration.
///
/// Laws (assumed): `(a + b) + c == a + (b + c)`.
pub trait AddSemigroup:
    AddOps +
    AddFold
{
    fn sum_nonempty(values: NonEmpty<Self>) -> Self {
        let (head, tail) = values.into_parts();
        Self::sum_of(head, tail)
    }

    fn sum_result<I>(itr: I) -> Result<Self, EmptyCollection>
    where I: IntoIterator<Item = Self> {
        let mut itr = itr.into_iter();
        match itr.next() {
            Some(first) => Ok(Self::sum_of(first, itr)),
            None => {
                trace!("sum of empty sequence: {}", type_name::<Self>());
                Err(EmptyCollection::new())
            }
        }
    }
}

/// Laws (assumed): `a + 0 == a == 0 + a`.
pub trait AddMonoid:
    AddSemigroup +
    HasZero
{
    fn sum<I>(itr: I) -> Self
    where I: IntoIterator<Item = Self> {
        let mut itr = itr.into_iter();
        match itr.next() {
            Some(first) => Self::sum_of(first, itr),
            None => Self::zero()
        }
    }
}

/// Marker: `a + b == b + a`.
pub trait AddCommMonoid: AddMonoid {}

/// Laws (assumed): `a + (-a) == 0`, `a - b == a + (-b)`.
pub trait AddGroup:
    AddMonoid +
    Neg<Output = Self> +
    Sub<Output = Self>
{}

pub trait AddAbelGroup:
    AddGroup +
    AddCommMonoid
{}
