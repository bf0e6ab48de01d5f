//! Lenient parsing of user-entered text into engine inputs
//!
//! Text that does not start with a usable number becomes `None` ("not entered")
//! instead of an error. Only the engine decides whether a missing value is
//! fatal.

use crate::core::models::GradeEntry;

/// Parse an average or target field.
///
/// Leading whitespace is skipped and the longest numeric prefix is read, so
/// `"8.5abc"` gives `8.5`. Text without a leading number, or a non-finite
/// value, yields `None`.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    trimmed[..numeric_prefix_len(trimmed)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Whole-field variant of [`parse_number`] for command-line values.
fn parse_number_strict(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if numeric_prefix_len(trimmed) != trimmed.len() {
        return None;
    }
    parse_number(trimmed)
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, 0 if there is no mantissa digit.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }
    end
}

/// Parse a credit field. Negative credits fail the range check and yield `None`.
#[must_use]
pub fn parse_credits(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v >= 0.0)
}

/// Build a grade entry from raw term fields.
#[must_use]
pub fn parse_entry(average: &str, credits: &str) -> GradeEntry {
    GradeEntry::partial(parse_number(average), parse_credits(credits))
}

/// Parse a strict `AVERAGE:CREDITS` pair, as given on the command line.
///
/// # Errors
/// Returns a message when the separator is missing or either side is not a valid number.
pub fn parse_term_pair(text: &str) -> Result<GradeEntry, String> {
    let (average, credits) = text
        .split_once(':')
        .ok_or_else(|| format!("expected AVERAGE:CREDITS, got '{text}'"))?;
    let average = parse_number_strict(average)
        .ok_or_else(|| format!("invalid term average in '{text}'"))?;
    let credits = parse_number_strict(credits)
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| format!("invalid term credits in '{text}'"))?;
    Ok(GradeEntry::new(average, credits))
}
