//! Exit codes & stdout/stderr routing.

/// Domain outcome produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converged,
    TermLimit,
    Refusal,
}

/// Output mode chosen by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Target stream for output emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Exit code for a given outcome (domain-level only).
pub fn exit_code(outcome: Outcome) -> u8 {
    match outcome {
        Outcome::Converged => 0,
        Outcome::TermLimit => 1,
        Outcome::Refusal => 2,
    }
}

/// Output stream for a given outcome and output mode.
///
/// In JSON mode, all domain outcomes go to stdout.
/// In human mode, refusals go to stderr.
pub fn output_stream(outcome: Outcome, mode: OutputMode) -> OutputStream {
    match (mode, outcome) {
        (OutputMode::Json, _) => OutputStream::Stdout,
        (OutputMode::Human, Outcome::Refusal) => OutputStream::Stderr,
        (OutputMode::Human, _) => OutputStream::Stdout,
    }
}
