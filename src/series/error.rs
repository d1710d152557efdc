//! Approximation errors.
//!
//! Both variants are precondition violations caught before the summation loop
//! starts. A tolerance that is not finite and positive would keep the loop
//! running forever, so it never reaches the approximator.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ApproxError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_terms: must be >= {min}. got {got}")]
    InvalidMaxTerms { got: u64, min: u64 },
}
