use derive_more::Display;
use crate::{HasZero, MulMonoidWithUnits, Unit};

/// A value proven to differ from the additive identity.
///
/// Weaker than `Unit`: a non-zero value need not be invertible
/// (e.g. `2` mod `4`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[display("{_0}")]
pub struct NonZero<T>(T);

impl<T> NonZero<T>
where T: HasZero {
    /// `None` if `value` is zero.
    pub fn new(value: T) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }
}

impl<T> NonZero<T> {
    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> NonZero<T>
where T: MulMonoidWithUnits {
    pub fn unit(&self) -> Option<Unit<T>> {
        self.0.unit()
    }
}

impl<T> AsRef<T> for NonZero<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
