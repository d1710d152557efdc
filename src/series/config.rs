//! Approximation settings, passed explicitly into [`Approximator::run`].
//!
//! [`Approximator::run`]: super::approximator::Approximator::run

use super::approximator::SEED_TERMS;
use super::error::ApproxError;

pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Progress events are emitted at every multiple of this index.
pub const PROGRESS_INTERVAL: u64 = 100;

/// A convergence tolerance that is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(value: f64) -> Result<Self, ApproxError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ApproxError::InvalidTolerance { got: value });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ApproxConfig {
    pub tolerance: Tolerance,
    /// Emit a progress event every [`PROGRESS_INTERVAL`] terms.
    pub verbose: bool,
    /// Stop once this many terms are summed, converged or not. `None` runs
    /// until the tolerance is met.
    pub max_terms: Option<u64>,
}

impl ApproxConfig {
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            verbose: false,
            max_terms: None,
        }
    }

    /// Validates raw settings as they arrive from the command line.
    pub fn from_raw(
        tolerance: f64,
        verbose: bool,
        max_terms: Option<u64>,
    ) -> Result<Self, ApproxError> {
        let mut config = Self::new(Tolerance::new(tolerance)?).with_verbose(verbose);
        if let Some(limit) = max_terms {
            config = config.with_max_terms(limit)?;
        }
        Ok(config)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_max_terms(mut self, max_terms: u64) -> Result<Self, ApproxError> {
        if max_terms < SEED_TERMS {
            return Err(ApproxError::InvalidMaxTerms {
                got: max_terms,
                min: SEED_TERMS,
            });
        }
        self.max_terms = Some(max_terms);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_tolerance() {
        for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Tolerance::new(bad).unwrap_err();
            assert!(matches!(err, ApproxError::InvalidTolerance { .. }));
        }
    }

    #[test]
    fn accepts_positive_tolerance() {
        assert_eq!(Tolerance::new(1.5).expect("valid").get(), 1.5);
        let tiny = Tolerance::new(f64::MIN_POSITIVE).expect("valid");
        assert_eq!(tiny.get(), f64::MIN_POSITIVE);
    }

    #[test]
    fn default_matches_cli_default() {
        let config = ApproxConfig::default();
        assert_eq!(config.tolerance.get(), DEFAULT_TOLERANCE);
        assert!(!config.verbose);
        assert_eq!(config.max_terms, None);
    }

    #[test]
    fn max_terms_below_seed_rejected() {
        let err = ApproxConfig::from_raw(0.01, false, Some(1)).unwrap_err();
        assert_eq!(err, ApproxError::InvalidMaxTerms { got: 1, min: 2 });
        let ok = ApproxConfig::from_raw(0.01, true, Some(2)).expect("valid");
        assert_eq!(ok.max_terms, Some(2));
        assert!(ok.verbose);
    }
}
