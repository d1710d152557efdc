//! Pipeline orchestration: validate → sum → truncate → output.
//!
//! Human progress lines are written to the caller's writer while the series
//! is being summed. The final report (or refusal) comes back as a string so
//! the caller can route it by outcome.

use std::error::Error;
use std::io::{self, Write};

use tracing::info;

use crate::cli::args::Args;
use crate::cli::exit::Outcome;
use crate::output::human::header::{
    Settings as HumanSettings, Verdict, render_refusal_header, render_report_header,
};
use crate::output::human::progress::{DONE_LINE, WORKING_LINE, render_progress_block};
use crate::output::human::refusal::render_refusal_body;
use crate::output::human::report::{ReportBody, render_report_body};
use crate::output::json::{
    JsonOutput, Progress, ProgressLog, Refusal as JsonRefusal, Settings as JsonSettings, Summary,
};
use crate::refusal::details::Refusal;
use crate::series::approximator::{Approximation, Approximator, ProgressEvent, Termination};
use crate::series::config::ApproxConfig;
use crate::series::truncate::{decimal_places, truncate};

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

/// The approximation plus its display form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub approximation: Approximation,
    pub decimal_places: u32,
    pub truncated: f64,
}

impl Report {
    pub fn new(config: &ApproxConfig, approximation: Approximation) -> Self {
        Self {
            approximation,
            decimal_places: decimal_places(config.tolerance),
            truncated: truncate(approximation.value, config.tolerance),
        }
    }
}

pub fn run<W: Write>(args: &Args, progress: &mut W) -> Result<PipelineResult, Box<dyn Error>> {
    let config = match ApproxConfig::from_raw(args.eps, args.verbose, args.max_terms) {
        Ok(config) => config,
        Err(err) => {
            info!(%err, "refusing to start");
            return Ok(render_refusal(args, &Refusal::from(err)));
        }
    };

    if args.json {
        let mut log = ProgressLog::default();
        let approximation = Approximator::run(&config, &mut |event: &ProgressEvent| {
            log.push(Progress::from(event))
        });
        if log.dropped() > 0 {
            info!(dropped = log.dropped(), "older progress entries dropped");
        }
        let report = Report::new(&config, approximation);
        return render_json_report(args, &report, log);
    }

    writeln!(progress, "{WORKING_LINE}")?;
    let mut write_error: Option<io::Error> = None;
    let approximation = Approximator::run(&config, &mut |event: &ProgressEvent| {
        if write_error.is_some() {
            return;
        }
        for line in render_progress_block(event) {
            if let Err(err) = writeln!(progress, "{line}") {
                write_error = Some(err);
                return;
            }
        }
    });
    if let Some(err) = write_error {
        return Err(err.into());
    }
    writeln!(progress, "{DONE_LINE}")?;
    writeln!(progress)?;
    progress.flush()?;

    let report = Report::new(&config, approximation);
    Ok(render_human_report(args, &report))
}

fn render_human_report(args: &Args, report: &Report) -> PipelineResult {
    let approximation = &report.approximation;
    let verdict = match approximation.termination {
        Termination::Converged => Verdict::Converged,
        Termination::TermLimit => Verdict::TermLimit,
    };
    let mut lines = render_report_header(verdict, &human_settings(args));
    lines.push(String::new());
    let body = ReportBody {
        tolerance: args.eps,
        terms: approximation.terms,
        residual: approximation.residual,
        decimal_places: report.decimal_places,
        truncated: report.truncated,
        termination: approximation.termination,
    };
    lines.extend(render_report_body(&body));
    PipelineResult {
        outcome: outcome_for(approximation.termination),
        output: lines.join("\n"),
    }
}

fn render_json_report(
    args: &Args,
    report: &Report,
    progress: ProgressLog,
) -> Result<PipelineResult, Box<dyn Error>> {
    let approximation = &report.approximation;
    let summary = Summary {
        terms: approximation.terms,
        approximation: approximation.value,
        residual: approximation.residual,
        decimal_places: report.decimal_places,
        truncated: report.truncated,
    };
    let output = JsonOutput::finished(
        approximation.termination,
        json_settings(args),
        summary,
        progress,
    )
    .to_string()?;
    Ok(PipelineResult {
        outcome: outcome_for(approximation.termination),
        output,
    })
}

fn render_refusal(args: &Args, refusal: &Refusal) -> PipelineResult {
    if args.json {
        let output = JsonOutput::refusal(json_settings(args), JsonRefusal::from(refusal))
            .to_string()
            .unwrap_or_else(|_| "{}".to_string());
        PipelineResult {
            outcome: Outcome::Refusal,
            output,
        }
    } else {
        let mut lines = render_refusal_header(refusal.code, &human_settings(args));
        lines.push(String::new());
        lines.extend(render_refusal_body(refusal));
        PipelineResult {
            outcome: Outcome::Refusal,
            output: lines.join("\n"),
        }
    }
}

fn outcome_for(termination: Termination) -> Outcome {
    match termination {
        Termination::Converged => Outcome::Converged,
        Termination::TermLimit => Outcome::TermLimit,
    }
}

fn human_settings(args: &Args) -> HumanSettings {
    HumanSettings {
        tolerance: args.eps,
        max_terms: args.max_terms,
    }
}

fn json_settings(args: &Args) -> JsonSettings {
    JsonSettings {
        tolerance: args.eps,
        verbose: args.verbose,
        max_terms: args.max_terms,
    }
}
