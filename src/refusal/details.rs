//! Refusal detail payloads & Next steps.
//!
//! Each refusal carries the offending value and a deterministic "next"
//! remediation. The JSON shape of the detail is built here so human and JSON
//! output agree on what was rejected.

use serde_json::{Value, json};

use crate::series::config::DEFAULT_TOLERANCE;
use crate::series::error::ApproxError;

use super::codes::RefusalCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Refusal {
    pub code: RefusalCode,
    pub detail: RefusalDetail,
}

impl From<ApproxError> for Refusal {
    fn from(err: ApproxError) -> Self {
        let kind = match err {
            ApproxError::InvalidTolerance { got } => RefusalKind::InvalidTolerance { got },
            ApproxError::InvalidMaxTerms { got, min } => RefusalKind::InvalidMaxTerms { got, min },
        };
        Self {
            code: RefusalCode::for_error(&err),
            detail: RefusalDetail::with_default_next(kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefusalDetail {
    pub kind: RefusalKind,
    /// Next-step remediation or rerun guidance (without "Next:" prefix).
    pub next: String,
}

impl RefusalDetail {
    pub fn with_default_next(kind: RefusalKind) -> Self {
        let next = kind.default_next();
        Self { kind, next }
    }

    pub fn to_json(&self) -> Value {
        match self.kind {
            RefusalKind::InvalidTolerance { got } => json!({
                "eps": got,
                "next": self.next,
            }),
            RefusalKind::InvalidMaxTerms { got, min } => json!({
                "max_terms": got,
                "min": min,
                "next": self.next,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RefusalKind {
    InvalidTolerance { got: f64 },
    InvalidMaxTerms { got: u64, min: u64 },
}

impl RefusalKind {
    pub fn default_next(&self) -> String {
        match self {
            RefusalKind::InvalidTolerance { .. } => {
                format!("rerun with a positive tolerance: pisum --eps {DEFAULT_TOLERANCE}")
            }
            RefusalKind::InvalidMaxTerms { min, .. } => {
                format!("rerun with --max-terms {min} or higher, or drop the limit")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_refusal_suggests_default() {
        let refusal = Refusal::from(ApproxError::InvalidTolerance { got: -1.0 });
        assert_eq!(refusal.code, RefusalCode::InvalidTolerance);
        assert_eq!(
            refusal.detail.next,
            "rerun with a positive tolerance: pisum --eps 0.01"
        );
        let detail = refusal.detail.to_json();
        assert_eq!(detail["eps"], -1.0);
    }

    #[test]
    fn nan_tolerance_serializes_as_null() {
        let refusal = Refusal::from(ApproxError::InvalidTolerance { got: f64::NAN });
        assert!(refusal.detail.to_json()["eps"].is_null());
    }

    #[test]
    fn max_terms_refusal_carries_minimum() {
        let refusal = Refusal::from(ApproxError::InvalidMaxTerms { got: 1, min: 2 });
        assert_eq!(refusal.code, RefusalCode::InvalidMaxTerms);
        let detail = refusal.detail.to_json();
        assert_eq!(detail["max_terms"], 1);
        assert_eq!(detail["min"], 2);
        assert_eq!(
            detail["next"],
            "rerun with --max-terms 2 or higher, or drop the limit"
        );
    }
}
