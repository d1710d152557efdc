//! Incremental evaluation of the series with a relative-residual stop.
//!
//! The approximator keeps the last two partial sums and extends them by a
//! single term per step, so reaching index n costs O(n) in total. The cold
//! start in [`Approximator::initialize`] is the only place that sums from
//! k = 1.
//!
//! The loop runs while `residual > tolerance`. A tolerance at or above
//! [`SEED_RESIDUAL`] therefore stops at the seed pair without advancing.

use tracing::{debug, trace, warn};

use super::config::{ApproxConfig, PROGRESS_INTERVAL};
use super::term::term;

/// Index reached by the cold start.
pub const SEED_TERMS: u64 = 2;

/// Residual reported before the first warm step.
pub const SEED_RESIDUAL: f64 = 1.0;

/// S(n-1) and S(n).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialSums {
    pub previous: f64,
    pub current: f64,
}

impl PartialSums {
    /// `|S(n) - S(n-1)| / S(n-1)`.
    #[inline]
    pub fn residual(&self) -> f64 {
        (self.current - self.previous).abs() / self.previous
    }
}

/// Why [`Approximator::run`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Converged,
    TermLimit,
}

/// Snapshot handed to a [`ProgressSink`] every [`PROGRESS_INTERVAL`] terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    pub term: u64,
    pub approximation: f64,
    pub residual: f64,
}

/// Receives progress events. Implemented for any `FnMut(&ProgressEvent)`.
pub trait ProgressSink {
    fn on_progress(&mut self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressEvent),
{
    #[inline]
    fn on_progress(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Final state of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// S(n) at termination.
    pub value: f64,
    /// The index n at termination.
    pub terms: u64,
    pub residual: f64,
    pub termination: Termination,
}

#[derive(Debug, Clone)]
pub struct Approximator {
    sums: PartialSums,
    n: u64,
    residual: f64,
}

impl Approximator {
    /// Cold start: sums k = 1..=2 to produce the first pair.
    pub fn initialize() -> Self {
        let mut sums = PartialSums {
            previous: 0.0,
            current: 0.0,
        };
        for k in 1..=SEED_TERMS {
            sums.previous = sums.current;
            sums.current += term(k);
        }
        debug!(
            previous = sums.previous,
            current = sums.current,
            "seeded partial sums"
        );
        Self {
            sums,
            n: SEED_TERMS,
            residual: SEED_RESIDUAL,
        }
    }

    /// Warm step: shifts the pair and adds term n+1 to the previous result.
    #[inline]
    pub fn advance(&mut self) {
        self.n += 1;
        self.sums.previous = self.sums.current;
        self.sums.current += term(self.n);
        self.residual = self.sums.residual();
    }

    #[inline]
    pub fn terms(&self) -> u64 {
        self.n
    }

    #[inline]
    pub fn sums(&self) -> PartialSums {
        self.sums
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.sums.current
    }

    #[inline]
    pub fn residual(&self) -> f64 {
        self.residual
    }

    pub fn progress(&self) -> ProgressEvent {
        ProgressEvent {
            term: self.n,
            approximation: self.sums.current,
            residual: self.residual,
        }
    }

    /// Sums terms until the residual is no longer above the tolerance, or
    /// until `config.max_terms` is reached.
    ///
    /// Progress events go to `sink` only when `config.verbose` is set. They
    /// are observational and never change the result.
    pub fn run<S>(config: &ApproxConfig, sink: &mut S) -> Approximation
    where
        S: ProgressSink + ?Sized,
    {
        let tolerance = config.tolerance.get();
        let mut approx = Self::initialize();

        while approx.residual > tolerance {
            if let Some(limit) = config.max_terms
                && approx.n >= limit
            {
                warn!(
                    terms = approx.n,
                    residual = approx.residual,
                    tolerance,
                    "term limit reached before convergence"
                );
                return approx.finish(Termination::TermLimit);
            }

            approx.advance();

            if config.verbose && approx.n.is_multiple_of(PROGRESS_INTERVAL) {
                let event = approx.progress();
                trace!(
                    term = event.term,
                    approximation = event.approximation,
                    residual = event.residual,
                    "progress"
                );
                sink.on_progress(&event);
            }
        }

        debug!(
            terms = approx.n,
            value = approx.value(),
            residual = approx.residual,
            "converged"
        );
        approx.finish(Termination::Converged)
    }

    fn finish(&self, termination: Termination) -> Approximation {
        Approximation {
            value: self.sums.current,
            terms: self.n,
            residual: self.residual,
            termination,
        }
    }
}
