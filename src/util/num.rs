/// Renders a number the way CatLang prints it.
///
/// The number's natural decimal representation is produced first; if it
/// contains a decimal point, trailing zero digits are stripped and then a
/// dangling decimal point is removed. Non-finite values render as `inf`,
/// `-inf` and `nan`.
///
/// ## Example
/// ```
/// use catlang::util::num::format_number;
///
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(4.0), "4");
/// assert_eq!(format_number(-2.25), "-2.25");
/// assert_eq!(format_number(-0.0), "-0");
/// assert_eq!(format_number(1.0 / 0.0), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let mut text = value.to_string();
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

/// Parses text as a number.
///
/// Surrounding whitespace is ignored. Only plain decimal notation with an
/// optional sign, fraction and exponent is accepted, so words such as `inf`
/// or `nan` are rejected.
///
/// ## Returns
/// - `Some(f64)`: The parsed number.
/// - `None`: If the text is not a number.
///
/// ## Example
/// ```
/// use catlang::util::num::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("-1.5e2"), Some(-150.0));
/// assert_eq!(parse_number("inf"), None);
/// assert_eq!(parse_number("cat"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty()
       || !text.chars()
               .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros_only_after_a_decimal_point() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn formatted_numbers_parse_back() {
        for value in [0.0, -0.0, 1.0, -1.5, 3.25, 1e-7, 123_456.789, 2.0f64.sqrt(), 1e21] {
            let text = format_number(value);
            assert!(!text.ends_with('.'), "dangling point in {text}");
            let parsed = parse_number(&text).unwrap();
            assert!((parsed - value).abs() <= f64::EPSILON * value.abs().max(1.0),
                    "{value} -> {text} -> {parsed}");
        }
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("12abc"), None);
    }
}
