use std::fmt;
use std::str::FromStr;

use crate::series::error::ApproxError;

/// Canonical refusal codes (v0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefusalCode {
    InvalidTolerance,
    InvalidMaxTerms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRefusalCode;

impl RefusalCode {
    pub const ALL: [RefusalCode; 2] = [RefusalCode::InvalidTolerance, RefusalCode::InvalidMaxTerms];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            RefusalCode::InvalidTolerance => "E_INVALID_TOLERANCE",
            RefusalCode::InvalidMaxTerms => "E_INVALID_MAX_TERMS",
        }
    }

    /// A short, stable reason label for human output.
    #[inline]
    pub const fn reason(self) -> &'static str {
        match self {
            RefusalCode::InvalidTolerance => "tolerance must be finite and > 0",
            RefusalCode::InvalidMaxTerms => "term limit below the two seed terms",
        }
    }

    pub const fn for_error(err: &ApproxError) -> Self {
        match err {
            ApproxError::InvalidTolerance { .. } => RefusalCode::InvalidTolerance,
            ApproxError::InvalidMaxTerms { .. } => RefusalCode::InvalidMaxTerms,
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnknownRefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown refusal code")
    }
}

impl std::error::Error for UnknownRefusalCode {}

impl FromStr for RefusalCode {
    type Err = UnknownRefusalCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E_INVALID_TOLERANCE" => Ok(RefusalCode::InvalidTolerance),
            "E_INVALID_MAX_TERMS" => Ok(RefusalCode::InvalidMaxTerms),
            _ => Err(UnknownRefusalCode),
        }
    }
}
