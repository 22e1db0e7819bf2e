//! Command implementations.

mod send;
mod simulate;
mod validate;

pub use send::run_send;
pub use simulate::run_simulate;
pub use validate::run_validate;
