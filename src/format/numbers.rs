// Number formatting utilities

/// Decimal places used for every approximation, residual and tolerance in
/// reports and progress blocks.
pub const REPORT_PLACES: usize = 12;

/// Format a float with a fixed number of decimal places.
pub fn format_fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Format a float with [`REPORT_PLACES`] decimals.
#[inline]
pub fn format_report(value: f64) -> String {
    format_fixed(value, REPORT_PLACES)
}

/// Format a float using the shortest round-trippable representation.
pub fn format_float_shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let plain = value.to_string();
    let scientific = format_scientific_short(value);
    if scientific.len() < plain.len() {
        scientific
    } else {
        plain
    }
}

fn format_scientific_short(value: f64) -> String {
    let raw = format!("{:e}", value);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => return raw,
    };

    let mantissa = trim_mantissa(mantissa);
    let exponent = trim_exponent(exponent);
    format!("{mantissa}e{exponent}")
}

fn trim_mantissa(input: &str) -> String {
    let mut out = input.to_string();
    if let Some(dot_index) = out.find('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.len() == dot_index + 1 {
            out.pop();
        }
    }
    out
}

fn trim_exponent(input: &str) -> String {
    let (sign, digits) = match input.as_bytes().first() {
        Some(b'+') => ("", &input[1..]),
        Some(b'-') => ("-", &input[1..]),
        _ => ("", input),
    };
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        format!("{sign}0")
    } else {
        format!("{sign}{digits}")
    }
}
