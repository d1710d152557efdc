//! The alternating series for pi, its incremental evaluation, and truncation
//! of the final value.

pub mod approximator;
pub mod config;
pub mod error;
pub mod term;
pub mod truncate;
