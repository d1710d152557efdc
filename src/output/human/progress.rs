// Human progress lines, streamed while the series is summed

use crate::format::numbers::format_report;
use crate::series::approximator::ProgressEvent;

pub const WORKING_LINE: &str = "Working...";
pub const DONE_LINE: &str = "Done!";

pub fn render_progress_block(event: &ProgressEvent) -> Vec<String> {
    vec![
        String::new(),
        format!("Current values at term {}", event.term),
        format!(
            "pi({}) = {}",
            event.term,
            format_report(event.approximation)
        ),
        format!("epsilon = {}", format_report(event.residual)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_progress_block() {
        let event = ProgressEvent {
            term: 100,
            approximation: 3.131592903558553,
            residual: 0.006377683335,
        };
        assert_eq!(
            render_progress_block(&event),
            vec![
                "",
                "Current values at term 100",
                "pi(100) = 3.131592903559",
                "epsilon = 0.006377683335",
            ]
        );
    }
}
