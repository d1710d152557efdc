// Human REFUSAL output formatting

use crate::format::numbers::format_float_shortest;
use crate::refusal::details::{Refusal, RefusalKind};

pub fn render_refusal_body(refusal: &Refusal) -> Vec<String> {
    vec![
        "Cannot approximate pi.".to_string(),
        format!("Reason ({}): {}.", refusal.code, refusal.code.reason()),
        render_example_line(refusal.detail.kind),
        format!("Next: {}", refusal.detail.next),
    ]
}

fn render_example_line(kind: RefusalKind) -> String {
    match kind {
        RefusalKind::InvalidTolerance { got } => {
            let got = format_float_shortest(got);
            format!("Example: --eps {got} was supplied.")
        }
        RefusalKind::InvalidMaxTerms { got, min } => {
            format!("Example: --max-terms {got} was supplied; the cold start alone uses {min}.")
        }
    }
}
