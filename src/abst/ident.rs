// Identity elements

/// Additive identity.
pub trait HasZero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        self == &Self::zero()
    }
}

/// Multiplicative identity.
pub trait HasOne: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool {
        self == &Self::one()
    }
}
