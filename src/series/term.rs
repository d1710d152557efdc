// Series terms and the direct partial-sum definition

/// The k-th signed term, `(-1)^(k+1) / (0.5k - 0.25)`, for k >= 1.
///
/// Summed from k = 1 this is `4 * (1 - 1/3 + 1/5 - ...)`, which converges to pi.
#[inline]
pub fn term(k: u64) -> f64 {
    let sign = if k.is_multiple_of(2) { -1.0 } else { 1.0 };
    sign / (0.5 * k as f64 - 0.25)
}

/// Sum of terms `1..=n`, computed from scratch. O(n).
pub fn partial_sum(n: u64) -> f64 {
    (1..=n).fold(0.0, |acc, k| acc + term(k))
}
