// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use meet_roster::CoreError;
use meet_roster_domain::DomainError;
use meet_roster_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The store could not be read or written.
    PersistenceFailure {
        /// A description of the storage failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PersistenceFailure { message } => {
                write!(f, "PersistenceFailure: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::PersistenceFailure {
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Builds the not-found error for an athlete slug.
#[must_use]
pub fn athlete_not_found(slug: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Athlete"),
        message: format!("AthleteNotFound: no athlete with slug '{slug}'"),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidSlug(slug) => ApiError::InvalidInput {
            field: String::from("slug"),
            message: format!("'{slug}' is not a valid slug"),
        },
        DomainError::InvalidSeasonMonth { field, month } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Month {month} is outside 0..=11"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not one of active, graduated"),
        },
        DomainError::InvalidGraduationYear(year) => ApiError::InvalidInput {
            field: String::from("graduationYear"),
            message: format!("Graduation year {year} is out of range"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::MalformedCsv(msg) => ApiError::InvalidInput {
            field: String::from("csv"),
            message: msg,
        },
    }
}
