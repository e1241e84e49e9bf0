mod ident;
mod add;
mod mul;
mod units;
mod ring;
mod module;

pub use ident::{HasZero, HasOne};
pub use add::{AddOps, AddFold, AddSemigroup, AddMonoid, AddCommMonoid, AddGroup, AddAbelGroup, fold_by_add, add_by_fold};
pub use mul::{MulOps, MulFold, MulSemigroup, MulCommSemigroup, MulMonoid, MulCommMonoid, MulGroup, MulCommGroup, fold_by_mul, mul_by_fold};
pub use units::{MulMonoidWithUnits, MulCommMonoidWithUnits, Invertible};
pub use ring::{Ring, CommRing, DivisionRing, Field};
pub use module::{LeftModule, RightModule, Bimodule};
