#![allow(unused)]

use std::ops::{Add, Div, Mul, Neg};
use alg_dsl::*;

pub fn init_logger() {
    let _ = alg_dsl::util::log::init_simple_logger(log::LevelFilter::Info);
}

/// A 2-vector over `f64`, with `+` given and the sum derived.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DoublePair(pub f64, pub f64);

impl Add for DoublePair {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        DoublePair(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Neg for DoublePair {
    type Output = Self;
    fn neg(self) -> Self {
        DoublePair(-self.0, -self.1)
    }
}

impl HasZero for DoublePair {
    fn zero() -> Self {
        DoublePair(0.0, 0.0)
    }
}

impl HasOne for DoublePair {
    fn one() -> Self {
        DoublePair(1.0, 1.0)
    }
}

alg_dsl::impl_add_fold!(DoublePair);
alg_dsl::impl_sub_op!(DoublePair);

impl AddSemigroup for DoublePair {}
impl AddMonoid for DoublePair {}
impl AddCommMonoid for DoublePair {}
impl AddGroup for DoublePair {}
impl AddAbelGroup for DoublePair {}

impl LeftModule for DoublePair {
    type Scalar = f64;
    fn left_scaled(self, r: &f64) -> Self {
        DoublePair(self.0 * r, self.1 * r)
    }
}

impl RightModule for DoublePair {
    type Scalar = f64;
    fn right_scaled(self, r: &f64) -> Self {
        DoublePair(self.0 * r, self.1 * r)
    }
}

impl Bimodule for DoublePair {}

/// A field-like wrapper over `f64`; zero is the only non-unit.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WrappedDouble(pub f64);

impl Add for WrappedDouble {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        WrappedDouble(self.0 + rhs.0)
    }
}

impl Neg for WrappedDouble {
    type Output = Self;
    fn neg(self) -> Self {
        WrappedDouble(-self.0)
    }
}

impl Mul for WrappedDouble {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        WrappedDouble(self.0 * rhs.0)
    }
}

impl HasZero for WrappedDouble {
    fn zero() -> Self {
        WrappedDouble(0.0)
    }
}

impl HasOne for WrappedDouble {
    fn one() -> Self {
        WrappedDouble(1.0)
    }
}

alg_dsl::impl_add_fold!(WrappedDouble);
alg_dsl::impl_sub_op!(WrappedDouble);
alg_dsl::impl_mul_fold!(WrappedDouble);

impl AddSemigroup for WrappedDouble {}
impl AddMonoid for WrappedDouble {}
impl AddCommMonoid for WrappedDouble {}
impl AddGroup for WrappedDouble {}
impl AddAbelGroup for WrappedDouble {}
impl MulSemigroup for WrappedDouble {}
impl MulMonoid for WrappedDouble {}

impl MulMonoidWithUnits for WrappedDouble {
    fn unit(&self) -> Option<Unit<Self>> {
        if self.is_zero() {
            None
        } else {
            Some(Unit::new_unchecked(*self, WrappedDouble(1.0 / self.0)))
        }
    }
}

impl<W> Div<W> for WrappedDouble
where W: Invertible<Elem = WrappedDouble> {
    type Output = Self;
    fn div(self, rhs: W) -> Self {
        self.divided_by_unit(&rhs)
    }
}

impl HasSign for WrappedDouble {
    fn signum(&self) -> Signum {
        if self.0 == 0.0 {
            Signum::Zero
        } else if self.0 < 0.0 {
            Signum::Neg
        } else {
            Signum::Pos
        }
    }

    fn flipped_sign(&self) -> Self {
        WrappedDouble(-self.0)
    }
}

impl AbsDecompose for WrappedDouble {
    fn absolute(&self) -> Self {
        WrappedDouble(self.0.abs())
    }
}

/// A caller-defined invertibility proof, unrelated to `Unit`.
pub struct WrappedDoubleWitness {
    pub value: WrappedDouble,
    pub reciprocal: WrappedDouble
}

impl Invertible for WrappedDoubleWitness {
    type Elem = WrappedDouble;

    fn value(&self) -> &WrappedDouble {
        &self.value
    }

    fn reciprocal(&self) -> &WrappedDouble {
        &self.reciprocal
    }
}

/// Only the fold witness is given; `+` is derived from it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SumPrimitive(pub i64);

impl AddFold for SumPrimitive {
    fn sum_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self> {
        SumPrimitive(rest.into_iter().fold(first.0, |res, a| res + a.0))
    }
}

alg_dsl::impl_add_op!(SumPrimitive);

impl HasZero for SumPrimitive {
    fn zero() -> Self {
        SumPrimitive(0)
    }
}

impl AddSemigroup for SumPrimitive {}
impl AddMonoid for SumPrimitive {}

/// Only the fold witness is given; `*` is derived from it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ProductPrimitive(pub i64);

impl MulFold for ProductPrimitive {
    fn product_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self> {
        ProductPrimitive(rest.into_iter().fold(first.0, |res, a| res * a.0))
    }
}

alg_dsl::impl_mul_op!(ProductPrimitive);

impl HasOne for ProductPrimitive {
    fn one() -> Self {
        ProductPrimitive(1)
    }
}

impl MulSemigroup for ProductPrimitive {}
impl MulMonoid for ProductPrimitive {}

/// `+` is plain addition, but the fold witness adds 1000 once per sum.
/// Any sum entry point that bypasses the witness is caught by the missing bias.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BiasedSum(pub i64);

impl Add for BiasedSum {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        BiasedSum(self.0 + rhs.0)
    }
}

impl AddFold for BiasedSum {
    fn sum_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self> {
        BiasedSum(rest.into_iter().fold(first.0, |res, a| res + a.0) + 1_000)
    }
}

impl HasZero for BiasedSum {
    fn zero() -> Self {
        BiasedSum(0)
    }
}

impl AddSemigroup for BiasedSum {}
impl AddMonoid for BiasedSum {}

/// Same as `BiasedSum` for products, with a bias of 100.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BiasedProduct(pub i64);

impl Mul for BiasedProduct {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        BiasedProduct(self.0 * rhs.0)
    }
}

impl MulFold for BiasedProduct {
    fn product_of<I>(first: Self, rest: I) -> Self
    where I: IntoIterator<Item = Self> {
        BiasedProduct(rest.into_iter().fold(first.0, |res, a| res * a.0) + 100)
    }
}

impl HasOne for BiasedProduct {
    fn one() -> Self {
        BiasedProduct(1)
    }
}

impl MulSemigroup for BiasedProduct {}
impl MulMonoid for BiasedProduct {}

pub type Mod4 = Zn<4>;

/// 2x2 integer matrix `[a, b, c, d]`, row-major. `*` does not commute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mat2(pub [i64; 4]);

impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.0;
        let [e, f, g, h] = rhs.0;
        Mat2([a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h])
    }
}

impl HasOne for Mat2 {
    fn one() -> Self {
        Mat2([1, 0, 0, 1])
    }
}

alg_dsl::impl_mul_fold!(Mat2);

impl MulSemigroup for Mat2 {}
impl MulMonoid for Mat2 {}

// invertible over the integers iff det = ±1
impl MulMonoidWithUnits for Mat2 {
    fn unit(&self) -> Option<Unit<Self>> {
        let [a, b, c, d] = self.0;
        let det = a * d - b * c;
        if det == 1 || det == -1 {
            let inv = Mat2([det * d, -det * b, -det * c, det * a]);
            Some(Unit::new_unchecked(*self, inv))
        } else {
            None
        }
    }
}

/// Strings under concatenation. `+` does not commute.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Word(pub String);

impl Word {
    pub fn of(s: &str) -> Self {
        Word(s.to_string())
    }
}

impl Add for Word {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Word(self.0 + &rhs.0)
    }
}

impl HasZero for Word {
    fn zero() -> Self {
        Word(String::new())
    }
}

alg_dsl::impl_add_fold!(Word);

impl AddSemigroup for Word {}
impl AddMonoid for Word {}
