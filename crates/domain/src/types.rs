// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Calendar date format used for meet dates and reference dates.
pub const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Competition gender code carried on athletes and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Boys / men.
    M,
    /// Girls / women.
    F,
}

impl Gender {
    /// Returns the single-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stored roster status of an athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AthleteStatus {
    /// On the roster.
    #[default]
    Active,
    /// Graduated by a bulk graduation.
    Graduated,
}

impl AthleteStatus {
    /// Converts this status to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Graduated => "graduated",
        }
    }
}

impl FromStr for AthleteStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "graduated" => Ok(Self::Graduated),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AthleteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validates that a slug can be used as a single store path segment.
///
/// # Errors
///
/// Returns `DomainError::InvalidSlug` if the slug is blank or contains `/`.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.trim().is_empty() || slug.contains('/') {
        return Err(DomainError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

/// A school. Created by an external admin action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    #[serde(default)]
    pub slug: String,
    pub name: String,
}

/// An athlete on the roster.
///
/// `graduation_year` and `status` are mutated only by lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    /// Unique key. Filled from the store key when absent in the document.
    #[serde(default)]
    pub slug: String,
    pub name: String,
    /// Weak reference; may dangle.
    #[serde(default)]
    pub school_slug: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    pub graduation_year: i32,
    #[serde(default)]
    pub status: AthleteStatus,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub advanced_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduated_at: Option<OffsetDateTime>,
}

impl Athlete {
    /// Creates a new active athlete with no lifecycle stamps.
    #[must_use]
    pub fn new(
        slug: &str,
        name: &str,
        school_slug: &str,
        gender: Option<Gender>,
        graduation_year: i32,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            school_slug: school_slug.to_string(),
            gender,
            graduation_year,
            status: AthleteStatus::Active,
            advanced_at: None,
            graduated_at: None,
        }
    }
}

/// A meet. Metadata is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meet {
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Meet {
    /// Parses a `YYYY-MM-DD` meet date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is not a calendar date.
    pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
        Date::parse(date_string.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        })
    }
}

/// One validated result row. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub athlete_name: String,
    #[serde(default)]
    pub school_slug: Option<String>,
    pub meet_slug: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub time_seconds: Option<f64>,
    #[serde(default)]
    pub distance_meters: Option<f64>,
    #[serde(default)]
    pub place: Option<u32>,
}

/// A season window. Months are zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: i32,
    pub start_month: u8,
    pub end_month: u8,
}

impl Season {
    /// Creates a validated season.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSeasonMonth` if either month is outside `0..=11`.
    pub const fn new(year: i32, start_month: u8, end_month: u8) -> Result<Self, DomainError> {
        if start_month > 11 {
            return Err(DomainError::InvalidSeasonMonth {
                field: "startMonth",
                month: start_month,
            });
        }
        if end_month > 11 {
            return Err(DomainError::InvalidSeasonMonth {
                field: "endMonth",
                month: end_month,
            });
        }
        Ok(Self {
            year,
            start_month,
            end_month,
        })
    }
}

/// A frozen copy of what was once the current season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedSeason {
    #[serde(flatten)]
    pub season: Season,
    #[serde(with = "time::serde::rfc3339")]
    pub archived_at: OffsetDateTime,
}
