//! Parsing and formatting of colon-delimited time and pace literals.

use crate::error::ParseError;

/// Splits a literal into its numeric colon-separated parts.
///
/// Every part must be pure ASCII digits; anything else is rejected rather
/// than partially parsed.
fn numeric_parts(s: &str) -> Result<Vec<u32>, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if !trimmed.contains(':') {
        return Err(ParseError::MissingSeparator(trimmed.to_string()));
    }

    trimmed
        .split(':')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::BadPart {
                    value: trimmed.to_string(),
                    part: part.to_string(),
                });
            }
            part.parse::<u32>().map_err(|_| ParseError::BadPart {
                value: trimmed.to_string(),
                part: part.to_string(),
            })
        })
        .collect()
}

/// Parses a pace literal (`M:SS`) into seconds.
///
/// # Arguments
/// * `s` - Pace text, e.g. `"1:30"` for 1 minute 30 seconds per unit distance
///
/// # Returns
/// Whole seconds as f64, ready for threshold arithmetic.
pub fn parse_pace(s: &str) -> Result<f64, ParseError> {
    match numeric_parts(s)?[..] {
        [mins, secs] => Ok(f64::from(mins) * 60.0 + f64::from(secs)),
        _ => Err(ParseError::WrongPartCount(s.trim().to_string())),
    }
}

/// Parses a time literal (`H:MM:SS` or `M:SS`) into seconds.
///
/// # Arguments
/// * `s` - Time text, e.g. `"5:30:00"` or `"24:00"`
///
/// # Returns
/// Whole seconds as f64.
pub fn parse_time(s: &str) -> Result<f64, ParseError> {
    match numeric_parts(s)?[..] {
        [hrs, mins, secs] => {
            Ok(f64::from(hrs) * 3600.0 + f64::from(mins) * 60.0 + f64::from(secs))
        }
        [mins, secs] => Ok(f64::from(mins) * 60.0 + f64::from(secs)),
        _ => Err(ParseError::WrongPartCount(s.trim().to_string())),
    }
}

/// Formats seconds as a pace literal (`M:SS`), rounding to the nearest
/// second and carrying 60 s into the minute.
pub fn format_pace(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let mut mins = (total / 60.0).floor() as u64;
    let mut secs = (total % 60.0).round() as u64;
    if secs == 60 {
        mins += 1;
        secs = 0;
    }
    format!("{mins}:{secs:02}")
}

/// Formats seconds as a time literal: `M:SS` under one hour, `H:MM:SS`
/// otherwise (hours unpadded). Rounds to the nearest second with carry.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let mut hrs = (total / 3600.0).floor() as u64;
    let mut mins = ((total % 3600.0) / 60.0).floor() as u64;
    let mut secs = (total % 60.0).round() as u64;
    if secs == 60 {
        mins += 1;
        secs = 0;
    }
    if mins == 60 {
        hrs += 1;
        mins = 0;
    }
    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}
