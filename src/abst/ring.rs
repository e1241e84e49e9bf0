use crate::{AddAbelGroup, MulMonoid, MulCommMonoid, MulMonoidWithUnits, MulCommMonoidWithUnits, Signum};

// Rings
//
// Distributivity is assumed: `a * (b + c) == a * b + a * c` and
// `(a + b) * c == a * c + b * c`.

pub trait Ring:
    AddAbelGroup +
    MulMonoid
{
    fn from_sign(e: Signum) -> Self {
        match e {
            Signum::Pos  =>  Self::one(),
            Signum::Zero =>  Self::zero(),
            Signum::Neg  => -Self::one()
        }
    }

    /// Compares against `-1` without negating `self`.
    fn is_pm_one(&self) -> bool {
        self.is_one() || self == &-Self::one()
    }
}

pub trait CommRing:
    Ring +
    MulCommMonoid
{}

/// A ring whose non-zero elements are meant to be units; invertibility is
/// still queried through `unit()`.
pub trait DivisionRing:
    Ring +
    MulMonoidWithUnits
{}

pub trait Field:
    CommRing +
    DivisionRing +
    MulCommMonoidWithUnits
{}
