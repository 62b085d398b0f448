// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Academic calendar and athlete lifecycle classification.
//!
//! The academic year that begins in August is named after the calendar
//! year in which it ends: August 2024 belongs to academic year 2025.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::error::DomainError;
use crate::types::Athlete;

/// First month of a new academic year.
pub const ACADEMIC_YEAR_START: Month = Month::August;

/// Month of the nominal graduation date.
pub const GRADUATION_MONTH: Month = Month::June;

/// Day of the nominal graduation date.
pub const GRADUATION_DAY: u8 = 1;

/// Returns the academic year a calendar date falls in.
#[must_use]
pub fn academic_year(date: Date) -> i32 {
    if u8::from(date.month()) >= u8::from(ACADEMIC_YEAR_START) {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Returns the nominal graduation date (June 1) of a graduation year.
///
/// # Errors
///
/// Returns `DomainError::InvalidGraduationYear` if the year is outside the
/// range supported by the calendar.
pub fn nominal_graduation_date(graduation_year: i32) -> Result<Date, DomainError> {
    Date::from_calendar_date(graduation_year, GRADUATION_MONTH, GRADUATION_DAY)
        .map_err(|_| DomainError::InvalidGraduationYear(graduation_year))
}

/// High-school grade of an active athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "FR")]
    Freshman,
    #[serde(rename = "SO")]
    Sophomore,
    #[serde(rename = "JR")]
    Junior,
    #[serde(rename = "SR")]
    Senior,
}

impl Grade {
    /// Maps years remaining until graduation to a grade.
    ///
    /// Offsets 1 through 4 index the grades from senior down to freshman.
    /// Any other offset has no grade.
    #[must_use]
    pub const fn from_years_remaining(years_remaining: i32) -> Option<Self> {
        match years_remaining {
            1 => Some(Self::Senior),
            2 => Some(Self::Junior),
            3 => Some(Self::Sophomore),
            4 => Some(Self::Freshman),
            _ => None,
        }
    }

    /// Two-letter abbreviation.
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Freshman => "FR",
            Self::Sophomore => "SO",
            Self::Junior => "JR",
            Self::Senior => "SR",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Lifecycle state derived from a graduation year and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LifecycleStatus {
    /// Graduation year is before the current academic year.
    #[serde(rename_all = "camelCase")]
    Graduated { graduated_year: i32, years_ago: i32 },
    /// Graduates at the end of the current academic year.
    ///
    /// `days_until_graduation` is negative once June 1 has passed.
    #[serde(rename_all = "camelCase")]
    Senior {
        graduating_year: i32,
        days_until_graduation: i64,
    },
    /// One to four years from graduation.
    #[serde(rename_all = "camelCase")]
    Active { grade: Grade, graduating_year: i32 },
    /// Graduation year too far ahead to map to a grade.
    #[serde(rename_all = "camelCase")]
    Unknown { graduating_year: i32 },
}

impl LifecycleStatus {
    /// Short label for display: `Graduated`, `Senior`, a grade, or `Unknown`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Graduated { .. } => "Graduated",
            Self::Senior { .. } => "Senior",
            Self::Active { grade, .. } => grade.abbreviation(),
            Self::Unknown { .. } => "Unknown",
        }
    }
}

/// Classifies an athlete relative to a reference date.
///
/// # Errors
///
/// Returns `DomainError::InvalidGraduationYear` if the athlete is a senior
/// whose graduation year cannot be represented as a calendar date.
pub fn classify(athlete: &Athlete, reference_date: Date) -> Result<LifecycleStatus, DomainError> {
    let current: i32 = academic_year(reference_date);
    let graduation_year: i32 = athlete.graduation_year;

    if graduation_year < current {
        return Ok(LifecycleStatus::Graduated {
            graduated_year: graduation_year,
            years_ago: current - graduation_year,
        });
    }

    if graduation_year == current {
        let graduation_date: Date = nominal_graduation_date(graduation_year)?;
        return Ok(LifecycleStatus::Senior {
            graduating_year: graduation_year,
            days_until_graduation: (graduation_date - reference_date).whole_days(),
        });
    }

    let status: LifecycleStatus = match Grade::from_years_remaining(graduation_year - current) {
        Some(grade) => LifecycleStatus::Active {
            grade,
            graduating_year: graduation_year,
        },
        None => LifecycleStatus::Unknown {
            graduating_year: graduation_year,
        },
    };
    Ok(status)
}
