// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A slug is empty or contains a path separator.
    InvalidSlug(String),
    /// A season month is outside `0..=11`.
    InvalidSeasonMonth {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        month: u8,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// An athlete status string is not `active` or `graduated`.
    InvalidStatus(String),
    /// A graduation year is outside the supported calendar range.
    InvalidGraduationYear(i32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlug(slug) => {
                write!(f, "Invalid slug '{slug}': must be non-empty and contain no '/'")
            }
            Self::InvalidSeasonMonth { field, month } => {
                write!(f, "Invalid {field}: {month}. Must be between 0 and 11")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStatus(status) => {
                write!(f, "Invalid status '{status}': must be active or graduated")
            }
            Self::InvalidGraduationYear(year) => {
                write!(f, "Invalid graduation year: {year}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// A single field-level failure while normalizing one value of an import row.
///
/// These are row-local: the row is skipped and the batch continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("MalformedDuration: '{input}' is not seconds, M:SS or H:M:SS")]
    MalformedDuration { input: String },

    #[error("OutOfRange: {value} exceeds the limit of {limit}")]
    OutOfRange { value: f64, limit: f64 },

    #[error("OutOfRange: {value} must not be negative")]
    Negative { value: f64 },

    #[error("MalformedNumber: '{input}' is not a number")]
    MalformedNumber { input: String },

    #[error("MalformedNumber: '{input}' is not a whole number")]
    NotWholeNumber { input: String },

    #[error("InvalidEnum: '{input}' must be one of {allowed}")]
    InvalidEnum {
        input: String,
        allowed: &'static str,
    },

    #[error("MissingRequiredField: value is missing or empty")]
    MissingRequiredField,

    #[error("ColumnCountMismatch: expected {expected} columns, found {found}")]
    ColumnCountMismatch { expected: usize, found: usize },
}

impl FieldError {
    /// The stable taxonomy code for this failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedDuration { .. } => "MalformedDuration",
            Self::OutOfRange { .. } | Self::Negative { .. } => "OutOfRange",
            Self::MalformedNumber { .. } | Self::NotWholeNumber { .. } => "MalformedNumber",
            Self::InvalidEnum { .. } => "InvalidEnum",
            Self::MissingRequiredField => "MissingRequiredField",
            Self::ColumnCountMismatch { .. } => "ColumnCountMismatch",
        }
    }
}
