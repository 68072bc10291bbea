/// Formats `value` with at most `max_fraction_digits` digits after the decimal point.
///
/// Trailing zeros (and a dangling `.`) are dropped, and negative zero prints as `0`.
pub(crate) fn format_decimals(value: f64, max_fraction_digits: usize) -> String {
    let mut formatted = format!("{:.*}", max_fraction_digits, value);
    if formatted.contains('.') {
        let trimmed_len = formatted.trim_end_matches('0').trim_end_matches('.').len();
        formatted.truncate(trimmed_len);
    }
    if formatted == "-0" {
        formatted.remove(0);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::format_decimals;

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_decimals(72.4, 0), "72");
        assert_eq!(format_decimals(72.6, 0), "73");
        assert_eq!(format_decimals(10.0, 1), "10");
        assert_eq!(format_decimals(10.04, 1), "10");
        assert_eq!(format_decimals(10.26, 1), "10.3");
        assert_eq!(format_decimals(0.126, 2), "0.13");
        assert_eq!(format_decimals(0.1, 2), "0.1");
        assert_eq!(format_decimals(-0.2, 0), "0");
        assert_eq!(format_decimals(-3.0, 1), "-3");
        assert_eq!(format_decimals(100.0, 0), "100");
    }
}
