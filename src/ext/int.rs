use std::ops::Div;
use num_bigint::BigInt;
use crate::*;

// Signed integers are commutative rings whose units are exactly ±1.

pub(crate) fn signum_of<T>(a: &T) -> Signum
where T: num_traits::Signed {
    if num_traits::Zero::is_zero(a) {
        Signum::Zero
    } else if num_traits::Signed::is_positive(a) {
        Signum::Pos
    } else {
        Signum::Neg
    }
}

macro_rules! impl_integer {
    ($t:ty) => {
        impl HasZero for $t {
            fn zero() -> Self {
                <$t as num_traits::Zero>::zero()
            }
        }

        impl HasOne for $t {
            fn one() -> Self {
                <$t as num_traits::One>::one()
            }
        }

        crate::impl_add_fold!($t);
        crate::impl_mul_fold!($t);

        impl AddSemigroup for $t {}
        impl AddMonoid for $t {}
        impl AddCommMonoid for $t {}
        impl AddGroup for $t {}
        impl AddAbelGroup for $t {}
        impl MulSemigroup for $t {}
        impl MulCommSemigroup for $t {}
        impl MulMonoid for $t {}
        impl MulCommMonoid for $t {}

        impl MulMonoidWithUnits for $t {
            fn unit(&self) -> Option<Unit<Self>> {
                if self.is_pm_one() {
                    Some(Unit::new_unchecked(self.clone(), self.clone()))
                } else {
                    None
                }
            }
        }

        impl MulCommMonoidWithUnits for $t {}
        impl Ring for $t {}
        impl CommRing for $t {}

        impl HasSign for $t {
            fn signum(&self) -> Signum {
                signum_of(self)
            }

            fn flipped_sign(&self) -> Self {
                -self.clone()
            }
        }

        impl AbsDecompose for $t {
            fn absolute(&self) -> Self {
                num_traits::Signed::abs(self)
            }
        }

        impl Div<Unit<$t>> for $t {
            type Output = $t;
            fn div(self, rhs: Unit<$t>) -> $t {
                self.divided_by_unit(&rhs)
            }
        }
    };
}

impl_integer!(i8);
impl_integer!(i16);
impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(isize);
impl_integer!(BigInt);
