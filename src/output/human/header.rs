// Human output headers

use crate::format::numbers::format_float_shortest;
use crate::refusal::codes::RefusalCode;

pub const TITLE: &str = "PISUM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Converged,
    TermLimit,
}

impl Verdict {
    fn label(self) -> &'static str {
        match self {
            Verdict::Converged => "CONVERGED",
            Verdict::TermLimit => "TERM LIMIT",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub tolerance: f64,
    pub max_terms: Option<u64>,
}

pub fn render_report_header(verdict: Verdict, settings: &Settings) -> Vec<String> {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        verdict.label().to_string(),
    ];
    if let Some(limit) = settings.max_terms {
        lines.push(String::new());
        lines.push(format!("Max terms: {limit}"));
    }
    lines
}

/// Settings are echoed verbatim since the rejected value may not be printable
/// with fixed decimals.
pub fn render_refusal_header(code: RefusalCode, settings: &Settings) -> Vec<String> {
    let max_terms = match settings.max_terms {
        Some(limit) => limit.to_string(),
        None => "none".to_string(),
    };
    vec![
        format!("{TITLE} ERROR ({code})"),
        String::new(),
        format!(
            "Settings: eps={} max_terms={max_terms}",
            format_float_shortest(settings.tolerance)
        ),
    ]
}
