//! Text rendering helpers for report values.

/// Placeholder printed for values that are not finite (e.g. a bias ratio over
/// an empty race subgroup).
pub const NOT_AVAILABLE: &str = "n/a";

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places. Non-finite values render as [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```
/// use frisk_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// assert_eq!(format_number(f64::NAN, 1), "n/a");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let factor = 10_f64.powi(decimals as i32);
    let abs_value = value.abs();
    // Nudge by a scaled epsilon so exact binary midpoints round away from zero.
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;
    let negative = value < 0.0 && rounded != 0.0;

    let grouped = group_thousands(&(rounded.trunc() as u64).to_string());
    let body = if decimals == 0 {
        grouped
    } else {
        let frac = format!("{:.prec$}", rounded.fract(), prec = decimals as usize);
        // "0.xx" -> ".xx"
        format!("{}{}", grouped, &frac[1..])
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Format a percentage value in `[0, 100]` as e.g. `"42.50%"`.
///
/// ```
/// use frisk_core::formatting::format_percent;
///
/// assert_eq!(format_percent(42.5, 2), "42.50%");
/// assert_eq!(format_percent(f64::NAN, 2), "n/a");
/// ```
pub fn format_percent(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{}%", format_number(value, decimals))
}

/// Format a signed percentage-point delta with an explicit sign.
///
/// ```
/// use frisk_core::formatting::format_point_delta;
///
/// assert_eq!(format_point_delta(3.25, 2), "+3.25 pts");
/// assert_eq!(format_point_delta(-0.5, 1), "-0.5 pts");
/// assert_eq!(format_point_delta(0.0, 1), "0.0 pts");
/// ```
pub fn format_point_delta(delta: f64, decimals: u32) -> String {
    if !delta.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let number = format_number(delta, decimals);
    if delta > 0.0 && number.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("+{} pts", number)
    } else {
        format!("{} pts", number)
    }
}

/// Format a record count with thousands separators.
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
    }

    #[test]
    fn test_format_number_negative_rounding_to_zero_drops_sign() {
        assert_eq!(format_number(-0.001, 1), "0.0");
    }

    #[test]
    fn test_format_number_rounds_up() {
        assert_eq!(format_number(1.005, 2), "1.01");
        assert_eq!(format_number(99.999, 2), "100.00");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN, 2), NOT_AVAILABLE);
        assert_eq!(format_number(f64::INFINITY, 2), NOT_AVAILABLE);
    }

    // ── format_percent ───────────────────────────────────────────────────────

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(100.0, 0), "100%");
        assert_eq!(format_percent(33.333_333, 2), "33.33%");
    }

    // ── format_point_delta ───────────────────────────────────────────────────

    #[test]
    fn test_format_point_delta_signs() {
        assert_eq!(format_point_delta(12.345, 2), "+12.35 pts");
        assert_eq!(format_point_delta(-12.345, 2), "-12.35 pts");
    }

    #[test]
    fn test_format_point_delta_tiny_positive_has_no_plus() {
        assert_eq!(format_point_delta(0.0001, 2), "0.00 pts");
    }

    // ── format_count ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(5), "5");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
