use pisum::output::human::header::{
    Settings, Verdict, render_refusal_header, render_report_header,
};
use pisum::output::human::refusal::render_refusal_body;
use pisum::output::human::report::{ReportBody, render_report_body};
use pisum::output::json::{
    JsonOutput, ProgressLog, Refusal as JsonRefusal, Settings as JsonSettings, Summary,
};
use pisum::refusal::details::Refusal;
use pisum::series::approximator::Termination;
use pisum::series::error::ApproxError;

fn join_lines(lines: Vec<String>) -> String {
    lines.join("\n")
}

#[test]
fn golden_term_limit_human_output() {
    let settings = Settings {
        tolerance: 1e-6,
        max_terms: Some(10),
    };
    let body = ReportBody {
        tolerance: 1e-6,
        terms: 10,
        residual: 0.06473020564571576,
        decimal_places: 6,
        truncated: 3.04184,
        termination: Termination::TermLimit,
    };

    let mut lines = render_report_header(Verdict::TermLimit, &settings);
    lines.push(String::new());
    lines.extend(render_report_body(&body));

    let actual = join_lines(lines);
    let expected = r#"PISUM

TERM LIMIT

Max terms: 10

Value of epsilon to compare to: 0.000001000000
Number (N) of terms required to reach that: 10
Value of pi(10): 3.041840000000
Residual: 0.064730205646
Decimal places: 6
Limit: stopped at 10 terms before the residual reached the tolerance."#;
    assert_eq!(actual, expected);
}

#[test]
fn golden_max_terms_refusal_human_output() {
    let refusal = Refusal::from(ApproxError::InvalidMaxTerms { got: 1, min: 2 });
    let settings = Settings {
        tolerance: 0.01,
        max_terms: Some(1),
    };

    let mut lines = render_refusal_header(refusal.code, &settings);
    lines.push(String::new());
    lines.extend(render_refusal_body(&refusal));

    let actual = join_lines(lines);
    let expected = r#"PISUM ERROR (E_INVALID_MAX_TERMS)

Settings: eps=0.01 max_terms=1

Cannot approximate pi.
Reason (E_INVALID_MAX_TERMS): term limit below the two seed terms.
Example: --max-terms 1 was supplied; the cold start alone uses 2.
Next: rerun with --max-terms 2 or higher, or drop the limit"#;
    assert_eq!(actual, expected);
}

#[test]
fn golden_refusal_json_output() {
    let refusal = Refusal::from(ApproxError::InvalidTolerance { got: -0.5 });
    let settings = JsonSettings {
        tolerance: -0.5,
        verbose: true,
        max_terms: None,
    };
    let output = JsonOutput::refusal(settings, JsonRefusal::from(&refusal))
        .to_string()
        .expect("json");
    let actual: serde_json::Value = serde_json::from_str(&output).expect("parse");
    let expected = serde_json::json!({
        "version": "pisum.v0",
        "outcome": "REFUSAL",
        "settings": {"tolerance": -0.5, "verbose": true, "max_terms": null},
        "summary": null,
        "progress": [],
        "refusal": {
            "code": "E_INVALID_TOLERANCE",
            "message": "tolerance must be finite and > 0",
            "detail": {
                "eps": -0.5,
                "next": "rerun with a positive tolerance: pisum --eps 0.01"
            }
        }
    });
    assert_eq!(actual, expected);
}

#[test]
fn golden_term_limit_json_output() {
    let settings = JsonSettings {
        tolerance: 1e-6,
        verbose: false,
        max_terms: Some(10),
    };
    let summary = Summary {
        terms: 10,
        approximation: 3.0418396189294032,
        residual: 0.06473020564571576,
        decimal_places: 6,
        truncated: 3.04184,
    };
    let output = JsonOutput::finished(
        Termination::TermLimit,
        settings,
        summary,
        ProgressLog::default(),
    );
    let value = serde_json::to_value(output).expect("json");
    assert_eq!(value["outcome"], "TERM_LIMIT");
    assert_eq!(value["settings"]["max_terms"], 10);
    assert_eq!(value["summary"]["decimal_places"], 6);
}
