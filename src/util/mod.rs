pub mod macros;
pub mod log;
