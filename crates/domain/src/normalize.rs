// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field normalization for imported result rows.
//!
//! Every function here is stateless: it turns one textual field into a
//! canonical typed value or a single [`FieldError`].

use crate::error::FieldError;
use crate::types::Gender;

/// Upper bound for an accepted duration, in seconds (10 hours).
pub const MAX_DURATION_SECONDS: f64 = 36_000.0;

/// Parses an elapsed-time string into seconds.
///
/// Accepted forms are a bare decimal number of seconds, `M:SS[.fff]`
/// and `H:M:SS[.fff]`. Components may carry surrounding whitespace.
///
/// # Errors
///
/// Returns `FieldError::MalformedDuration` if the input is empty, has an
/// unsupported number of `:` parts, has a non-numeric or negative component,
/// or does not produce a finite, non-negative total.
pub fn parse_duration(input: &str) -> Result<f64, FieldError> {
    let malformed = || FieldError::MalformedDuration {
        input: input.to_string(),
    };

    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Err(malformed());
    }

    let mut components: Vec<f64> = Vec::with_capacity(3);
    for part in trimmed.split(':') {
        let value: f64 = parse_component(part).ok_or_else(malformed)?;
        components.push(value);
    }

    let seconds: f64 = match components.as_slice() {
        [seconds] => *seconds,
        [minutes, seconds] => minutes * 60.0 + seconds,
        [hours, minutes, seconds] => hours * 3600.0 + minutes * 60.0 + seconds,
        _ => return Err(malformed()),
    };

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(malformed());
    }
    Ok(seconds)
}

fn parse_component(part: &str) -> Option<f64> {
    let part: &str = part.trim();
    if part.is_empty() || part.starts_with('-') {
        return None;
    }
    part.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rejects durations above [`MAX_DURATION_SECONDS`].
///
/// # Errors
///
/// Returns `FieldError::OutOfRange` when `seconds` exceeds the limit.
pub fn validate_duration_range(seconds: f64) -> Result<(), FieldError> {
    if seconds > MAX_DURATION_SECONDS {
        return Err(FieldError::OutOfRange {
            value: seconds,
            limit: MAX_DURATION_SECONDS,
        });
    }
    Ok(())
}

/// Rounds seconds to hundredths, half away from zero.
#[must_use]
pub fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Formats seconds as `M:SS.ss`, or `H:MM:SS.ss` from one hour upwards.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    // Whole hundredths so the carry into seconds and minutes is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_hundredths: u64 = (seconds.max(0.0) * 100.0).round() as u64;
    let hundredths: u64 = total_hundredths % 100;
    let total_seconds: u64 = total_hundredths / 100;
    let secs: u64 = total_seconds % 60;
    let total_minutes: u64 = total_seconds / 60;

    if total_minutes >= 60 {
        let hours: u64 = total_minutes / 60;
        let minutes: u64 = total_minutes % 60;
        format!("{hours}:{minutes:02}:{secs:02}.{hundredths:02}")
    } else {
        format!("{total_minutes}:{secs:02}.{hundredths:02}")
    }
}

/// Parses an optional gender code, case-insensitively.
///
/// Empty input yields `None`.
///
/// # Errors
///
/// Returns `FieldError::InvalidEnum` for any other non-empty value.
pub fn parse_gender(input: &str) -> Result<Option<Gender>, FieldError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.to_ascii_uppercase().as_str() {
        "M" => Ok(Some(Gender::M)),
        "F" => Ok(Some(Gender::F)),
        _ => Err(FieldError::InvalidEnum {
            input: trimmed.to_string(),
            allowed: "M, F",
        }),
    }
}

/// Parses a decimal number using standard numeric parsing.
///
/// # Errors
///
/// Returns `FieldError::MalformedNumber` if the input is not a finite number.
pub fn parse_decimal(input: &str) -> Result<f64, FieldError> {
    let trimmed: &str = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::MalformedNumber {
            input: input.to_string(),
        })
}

/// Parses a non-negative distance in meters.
///
/// # Errors
///
/// Returns `FieldError::MalformedNumber` for non-numeric input and
/// `FieldError::Negative` for values below zero.
pub fn parse_distance(input: &str) -> Result<f64, FieldError> {
    let value: f64 = parse_decimal(input)?;
    if value < 0.0 {
        return Err(FieldError::Negative { value });
    }
    Ok(value)
}

/// Parses a finishing place. `"3"` and `"3.0"` are both place 3.
///
/// # Errors
///
/// Returns `FieldError::MalformedNumber` for non-numeric input,
/// `FieldError::NotWholeNumber` for fractional values and
/// `FieldError::Negative` for values below zero.
pub fn parse_place(input: &str) -> Result<u32, FieldError> {
    let value: f64 = parse_decimal(input)?;
    if value < 0.0 {
        return Err(FieldError::Negative { value });
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(FieldError::NotWholeNumber {
            input: input.trim().to_string(),
        });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let place: u32 = value as u32;
    Ok(place)
}
