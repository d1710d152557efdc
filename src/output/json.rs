// JSON output schema assembly

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::Value;

use crate::refusal::details::Refusal as DomainRefusal;
use crate::series::approximator::{ProgressEvent, Termination};

pub const VERSION: &str = "pisum.v0";

/// Most progress entries kept in one JSON object. Older entries are dropped
/// first so memory stays flat however small the tolerance is.
pub const MAX_PROGRESS_EVENTS: usize = 1_000;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Converged,
    TermLimit,
    Refusal,
}

impl From<Termination> for Outcome {
    fn from(termination: Termination) -> Self {
        match termination {
            Termination::Converged => Outcome::Converged,
            Termination::TermLimit => Outcome::TermLimit,
        }
    }
}

/// Settings as supplied. `tolerance` is `null` when it was not a finite number.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Settings {
    pub tolerance: f64,
    pub verbose: bool,
    pub max_terms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub terms: u64,
    pub approximation: f64,
    pub residual: f64,
    pub decimal_places: u32,
    pub truncated: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Progress {
    pub term: u64,
    pub approximation: f64,
    pub residual: f64,
}

impl From<&ProgressEvent> for Progress {
    fn from(event: &ProgressEvent) -> Self {
        Self {
            term: event.term,
            approximation: event.approximation,
            residual: event.residual,
        }
    }
}

/// Bounded buffer of the most recent progress entries.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    capacity: usize,
    recent: VecDeque<Progress>,
    dropped: u64,
}

impl ProgressLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recent: VecDeque::with_capacity(capacity.min(MAX_PROGRESS_EVENTS)),
            dropped: 0,
        }
    }

    pub fn push(&mut self, entry: Progress) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
            self.dropped += 1;
        }
        self.recent.push_back(entry);
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn into_parts(self) -> (Vec<Progress>, u64) {
        (self.recent.into(), self.dropped)
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new(MAX_PROGRESS_EVENTS)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Limits {
    pub max_progress_events: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_progress_events: MAX_PROGRESS_EVENTS as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    pub code: String,
    pub message: String,
    pub detail: Value,
}

impl From<&DomainRefusal> for Refusal {
    fn from(refusal: &DomainRefusal) -> Self {
        Self {
            code: refusal.code.as_str().to_string(),
            message: refusal.code.reason().to_string(),
            detail: refusal.detail.to_json(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub outcome: Outcome,
    pub settings: Settings,
    pub summary: Option<Summary>,
    pub limits: Limits,
    pub progress: Vec<Progress>,
    pub progress_dropped: u64,
    pub refusal: Option<Refusal>,
}

impl JsonOutput {
    pub fn finished(
        termination: Termination,
        settings: Settings,
        summary: Summary,
        progress: ProgressLog,
    ) -> Self {
        let (progress, progress_dropped) = progress.into_parts();
        Self {
            version: VERSION,
            outcome: termination.into(),
            settings,
            summary: Some(summary),
            limits: Limits::default(),
            progress,
            progress_dropped,
            refusal: None,
        }
    }

    pub fn refusal(settings: Settings, refusal: Refusal) -> Self {
        Self {
            version: VERSION,
            outcome: Outcome::Refusal,
            settings,
            summary: None,
            limits: Limits::default(),
            progress: Vec::new(),
            progress_dropped: 0,
            refusal: Some(refusal),
        }
    }

    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
