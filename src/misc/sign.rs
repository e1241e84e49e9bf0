use std::ops::{Neg, Mul};
use derive_more::{Display, Debug};
use is_even::IsEven;
use crate::{HasOne, MulSemigroup, MulCommSemigroup, MulMonoid, MulCommMonoid, MulMonoidWithUnits, MulCommMonoidWithUnits, Unit};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, Debug)]
#[cfg_attr(feature = "serde", derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr))]
#[repr(i8)]
pub enum Signum {
    #[display("-")]
    #[debug("-")]
    Neg = -1,

    #[display("0")]
    #[debug("0")]
    Zero = 0,

    #[default]
    #[display("+")]
    #[debug("+")]
    Pos = 1
}

impl Signum {
    pub fn flipped(self) -> Self {
        use Signum::*;
        match self {
            Neg  => Pos,
            Zero => Zero,
            Pos  => Neg
        }
    }

    pub fn from_parity<I: IsEven>(val: I) -> Self {
        if val.is_even() {
            Signum::Pos
        } else {
            Signum::Neg
        }
    }

    pub fn pow(self, n: u32) -> Self {
        match self {
            Signum::Pos  => Signum::Pos,
            Signum::Neg  => Self::from_parity(i64::from(n)),
            Signum::Zero => if n == 0 { Signum::Pos } else { Signum::Zero }
        }
    }
}

macro_rules! impl_int_conversion {
    ($t:ty) => {
        impl From<$t> for Signum {
            fn from(value: $t) -> Self {
                if value > 0 {
                    Signum::Pos
                } else if value < 0 {
                    Signum::Neg
                } else {
                    Signum::Zero
                }
            }
        }

        impl From<Signum> for $t {
            fn from(value: Signum) -> Self {
                value as i8 as $t
            }
        }
    };
}

impl_int_conversion!(i8);
impl_int_conversion!(i16);
impl_int_conversion!(i32);
impl_int_conversion!(i64);
impl_int_conversion!(i128);
impl_int_conversion!(isize);

impl Neg for Signum {
    type Output = Self;
    fn neg(self) -> Self {
        self.flipped()
    }
}

impl Mul for Signum {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        use Signum::*;
        match (self, rhs) {
            (Zero, _) | (_, Zero) => Zero,
            (Pos, Pos) | (Neg, Neg) => Pos,
            (Pos, Neg) | (Neg, Pos) => Neg
        }
    }
}

impl HasOne for Signum {
    fn one() -> Self {
        Signum::Pos
    }
}

crate::impl_mul_fold!(Signum);

impl MulSemigroup for Signum {}
impl MulCommSemigroup for Signum {}
impl MulMonoid for Signum {}
impl MulCommMonoid for Signum {}

impl MulMonoidWithUnits for Signum {
    fn unit(&self) -> Option<Unit<Self>> {
        match self {
            Signum::Zero => None,
            _ => Some(Unit::new_unchecked(*self, *self))
        }
    }
}

impl MulCommMonoidWithUnits for Signum {}

/// An element carrying a sign, which can be flipped.
pub trait HasSign: Sized {
    fn signum(&self) -> Signum;
    fn flipped_sign(&self) -> Self;

    fn is_positive(&self) -> bool {
        self.signum() == Signum::Pos
    }

    fn is_negative(&self) -> bool {
        self.signum() == Signum::Neg
    }

    fn is_sign_zero(&self) -> bool {
        self.signum() == Signum::Zero
    }
}

/// `x == signum(x) * absolute(x)`.
pub trait AbsDecompose: HasSign {
    fn absolute(&self) -> Self;
}

impl HasSign for Signum {
    fn signum(&self) -> Signum {
        *self
    }

    fn flipped_sign(&self) -> Self {
        self.flipped()
    }
}

impl AbsDecompose for Signum {
    fn absolute(&self) -> Self {
        match self {
            Signum::Zero => Signum::Zero,
            _ => Signum::Pos
        }
    }
}

pub fn absolutes<'a, T, I>(iter: I) -> Vec<T>
where T: AbsDecompose + 'a, I: IntoIterator<Item = &'a T> {
    iter.into_iter().map(|a| a.absolute()).collect()
}
