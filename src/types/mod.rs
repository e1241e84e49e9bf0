mod non_empty;
mod unit;
mod non_zero;
mod zn;

pub use non_empty::NonEmpty;
pub use unit::Unit;
pub use non_zero::NonZero;
pub use zn::Zn;
