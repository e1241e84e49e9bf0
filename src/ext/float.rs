use std::ops::Div;
use crate::*;
use super::int::signum_of;

// `f32` / `f64` as fields: every non-zero value is a unit.

macro_rules! impl_float {
    ($t:ty) => {
        impl HasZero for $t {
            fn zero() -> Self {
                0.0
            }
        }

        impl HasOne for $t {
            fn one() -> Self {
                1.0
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
                if self.is_zero() {
                    None
                } else {
                    Some(Unit::new_unchecked(*self, 1.0 / self))
                }
            }
        }

        impl MulCommMonoidWithUnits for $t {}
        impl Ring for $t {}
        impl CommRing for $t {}
        impl DivisionRing for $t {}
        impl Field for $t {}

        impl HasSign for $t {
            fn signum(&self) -> Signum {
                signum_of(self)
            }

            fn flipped_sign(&self) -> Self {
                -self
            }
        }

        impl AbsDecompose for $t {
            fn absolute(&self) -> Self {
                self.abs()
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

impl_float!(f32);
impl_float!(f64);
