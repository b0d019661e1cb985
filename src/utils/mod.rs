// Utils compartidos

pub mod constants;
pub mod time;

pub use constants::*;
