use std::ops::{Add, Neg, Sub, Mul, AddAssign, SubAssign, MulAssign};
use std::str::FromStr;
use derive_more::{Display, Debug};
use num_integer::Integer;
use auto_impl_ops::auto_ops;

use crate::{HasZero, HasOne, AddSemigroup, AddMonoid, AddCommMonoid, AddGroup, AddAbelGroup, MulSemigroup, MulCommSemigroup, MulMonoid, MulCommMonoid, MulMonoidWithUnits, MulCommMonoidWithUnits, Ring, CommRing, Unit};

type I = u64;

/// Integers modulo `N`, held as the representative in `0..N`.
///
/// A commutative ring; `a` is a unit iff `gcd(a, N) == 1`.
///
/// `N == 0` is rejected at compile time:
///
/// ```compile_fail
/// use alg_dsl::{HasZero, Zn};
/// let _ = Zn::<0>::zero();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u64", into = "u64"))]
pub struct Zn<const N: I>(I);

impl<const N: I> Zn<N> {
    pub fn new(a: I) -> Self {
        const { assert!(N > 0, "modulus must be positive") };
        Self(a % N)
    }

    pub fn from_signed(a: i64) -> Self {
        const { assert!(N > 0, "modulus must be positive") };
        let r = (a as i128).rem_euclid(N as i128);
        Self(r as I)
    }

    pub fn rep(&self) -> &I {
        &self.0
    }
}

impl<const N: I> From<I> for Zn<N> {
    fn from(a: I) -> Self {
        Self::new(a)
    }
}

impl<const N: I> From<Zn<N>> for I {
    fn from(a: Zn<N>) -> Self {
        a.0
    }
}

impl<const N: I> Default for Zn<N> {
    fn default() -> Self {
        Self::zero()
    }
}

// Unsigned first, so representatives above `i64::MAX` still parse.
impl<const N: I> FromStr for Zn<N> {
    type Err = <i64 as FromStr>::Err;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<I>() {
            Ok(a) => Ok(Self::new(a)),
            Err(_) => s.parse::<i64>().map(Self::from_signed)
        }
    }
}

impl<const N: I> HasZero for Zn<N> {
    fn zero() -> Self {
        const { assert!(N > 0, "modulus must be positive") };
        Self(0)
    }
}

impl<const N: I> HasOne for Zn<N> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const N: I> Neg for Zn<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(N - self.0)
    }
}

impl<const N: I> Neg for &Zn<N> {
    type Output = Zn<N>;
    fn neg(self) -> Zn<N> {
        -(*self)
    }
}

#[auto_ops]
impl<'a, 'b, const N: I> Add<&'b Zn<N>> for &'a Zn<N> {
    type Output = Zn<N>;
    fn add(self, rhs: &'b Zn<N>) -> Self::Output {
        let a = (self.0 as u128 + rhs.0 as u128) % (N as u128);
        Zn(a as I)
    }
}

#[auto_ops]
impl<'a, 'b, const N: I> Sub<&'b Zn<N>> for &'a Zn<N> {
    type Output = Zn<N>;
    fn sub(self, rhs: &'b Zn<N>) -> Self::Output {
        self + (-rhs)
    }
}

#[auto_ops]
impl<'a, 'b, const N: I> Mul<&'b Zn<N>> for &'a Zn<N> {
    type Output = Zn<N>;
    fn mul(self, rhs: &'b Zn<N>) -> Self::Output {
        let a = (self.0 as u128 * rhs.0 as u128) % (N as u128);
        Zn(a as I)
    }
}

crate::impl_add_fold!([const N: I] Zn<N>);
crate::impl_mul_fold!([const N: I] Zn<N>);

impl<const N: I> AddSemigroup for Zn<N> {}
impl<const N: I> AddMonoid for Zn<N> {}
impl<const N: I> AddCommMonoid for Zn<N> {}
impl<const N: I> AddGroup for Zn<N> {}
impl<const N: I> AddAbelGroup for Zn<N> {}
impl<const N: I> MulSemigroup for Zn<N> {}
impl<const N: I> MulCommSemigroup for Zn<N> {}
impl<const N: I> MulMonoid for Zn<N> {}
impl<const N: I> MulCommMonoid for Zn<N> {}

impl<const N: I> MulMonoidWithUnits for Zn<N> {
    fn unit(&self) -> Option<Unit<Self>> {
        // 1 = ax + Ny  ->  ax = 1 mod N.
        let (a, n) = (self.0 as i128, N as i128);
        let d = a.extended_gcd(&n);

        if d.gcd == 1 {
            let inv = d.x.rem_euclid(n) as I;
            Some(Unit::new_unchecked(*self, Self::new(inv)))
        } else {
            None
        }
    }
}

impl<const N: I> MulCommMonoidWithUnits for Zn<N> {}
impl<const N: I> Ring for Zn<N> {}
impl<const N: I> CommRing for Zn<N> {}
