#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod fees;
pub mod types;

pub use constants::{MAX_BASIS_POINTS, PERCENT_TOTAL};
