use clap::Parser;

use crate::series::config::DEFAULT_TOLERANCE;

/// CLI argument parsing.
///
/// Only the shape of each value is checked here. Whether a tolerance or term
/// limit is usable is decided by the approximator config, which turns a bad
/// value into a refusal rather than a usage error.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pisum",
    about = "Approximate pi by summing an alternating series until successive partial sums agree.",
    override_usage = "pisum [--eps <float>] [--verbose] [--max-terms <n>] [--json]"
)]
pub struct Args {
    /// Relative residual to stop at: x > 0 (default: 0.01).
    #[arg(
        long,
        visible_alias = "tolerance",
        value_name = "FLOAT",
        default_value_t = DEFAULT_TOLERANCE,
        value_parser = parse_number,
        allow_negative_numbers = true
    )]
    pub eps: f64,

    /// Print the current approximation every 100 terms.
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop after this many terms even if the tolerance is not met.
    #[arg(long, value_name = "N")]
    pub max_terms: Option<u64>,

    /// Emit JSON output (single object). With --verbose only the latest 1000
    /// progress entries are kept.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            eps: DEFAULT_TOLERANCE,
            verbose: false,
            max_terms: None,
            json: false,
        }
    }
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| "eps must be a valid number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pisum").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults_match_reference_program() {
        let args = parse(&[]).expect("parse");
        assert_eq!(args.eps, 0.01);
        assert!(!args.verbose);
        assert_eq!(args.max_terms, None);
        assert!(!args.json);
    }

    #[test]
    fn parses_all_flags() {
        let argv = ["--eps", "0.0001", "-v", "--max-terms", "500", "--json"];
        let args = parse(&argv).expect("parse");
        assert_eq!(args.eps, 0.0001);
        assert!(args.verbose);
        assert_eq!(args.max_terms, Some(500));
        assert!(args.json);
    }

    #[test]
    fn tolerance_alias_accepted() {
        let args = parse(&["--tolerance", "0.5"]).expect("parse");
        assert_eq!(args.eps, 0.5);
    }

    #[test]
    fn negative_eps_reaches_domain_validation() {
        let args = parse(&["--eps", "-1"]).expect("parse");
        assert_eq!(args.eps, -1.0);
    }

    #[test]
    fn non_numeric_eps_is_usage_error() {
        assert!(parse(&["--eps", "abc"]).is_err());
    }
}
