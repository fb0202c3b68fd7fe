//! Lenient number parsing for form and filter inputs.
//!
//! Inputs are read the way a browser's `parseFloat` / `parseInt(_, 10)` read
//! them: leading whitespace is skipped and the longest numeric prefix wins,
//! so `"100k"` is 100 and `"3.7"` is the integer 3. Input with no numeric
//! prefix yields `None`.

/// Parse the leading decimal number of `input`.
///
/// ```
/// use product_catalog::numeric::parse_float;
///
/// assert_eq!(parse_float("  100000"), Some(100_000.0));
/// assert_eq!(parse_float("12.5abc"), Some(12.5));
/// assert_eq!(parse_float("abc"), None);
/// assert_eq!(parse_float(""), None);
/// ```
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parse the leading base-10 integer of `input`.
///
/// ```
/// use product_catalog::numeric::parse_int;
///
/// assert_eq!(parse_int("42"), Some(42));
/// assert_eq!(parse_int(" -3"), Some(-3));
/// assert_eq!(parse_int("3.7"), Some(3));
/// assert_eq!(parse_int("x1"), None);
/// ```
#[must_use]
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }

    s[..sign + digits].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefixes() {
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("1e+"), Some(1.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("-2.5e-1x"), Some(-0.25));
        assert_eq!(parse_float("\t+7"), Some(7.0));
    }

    #[test]
    fn float_rejects_non_numbers() {
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("e5"), None);
        assert_eq!(parse_float("   "), None);
        assert_eq!(parse_float("NaN"), None);
    }

    #[test]
    fn float_infinity() {
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("inf"), None);
    }

    #[test]
    fn int_prefixes() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("+15 units"), Some(15));
        assert_eq!(parse_int("-0"), Some(0));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(".5"), None);
    }
}
