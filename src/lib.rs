mod abst;
mod types;
mod err;
mod ext;
mod misc;

pub use abst::*;
pub use types::*;
pub use err::*;
pub use ext::*;
pub use misc::*;

pub mod util;
