// Human CONVERGED / TERM LIMIT body formatting

use crate::format::numbers::format_report;
use crate::series::approximator::Termination;

#[derive(Debug, Clone, Copy)]
pub struct ReportBody {
    pub tolerance: f64,
    pub terms: u64,
    pub residual: f64,
    pub decimal_places: u32,
    pub truncated: f64,
    pub termination: Termination,
}

pub fn render_report_body(ctx: &ReportBody) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Value of epsilon to compare to: {}",
            format_report(ctx.tolerance)
        ),
        format!("Number (N) of terms required to reach that: {}", ctx.terms),
        format!(
            "Value of pi({}): {}",
            ctx.terms,
            format_report(ctx.truncated)
        ),
        format!("Residual: {}", format_report(ctx.residual)),
        format!("Decimal places: {}", ctx.decimal_places),
    ];
    if ctx.termination == Termination::TermLimit {
        lines.push(format!(
            "Limit: stopped at {} terms before the residual reached the tolerance.",
            ctx.terms
        ));
    }
    lines
}
