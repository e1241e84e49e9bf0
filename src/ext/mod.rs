mod iter;
mod int;
mod float;

pub use iter::AlgIterator;
