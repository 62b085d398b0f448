// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use meet_roster::{AthleteTransition, ImportReport};
use meet_roster_domain::{AthleteStatus, Grade, LifecycleStatus, Meet, validate_slug};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::ApiError;

/// Metadata of the meet an import targets.
///
/// Only the slug is always required. The other fields are read only when
/// the meet does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetDetails {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl MeetDetails {
    /// Returns the trimmed slug.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the slug is not valid.
    pub fn validated_slug(&self) -> Result<&str, ApiError> {
        let slug: &str = self.slug.trim();
        validate_slug(slug)?;
        Ok(slug)
    }

    /// Validates the details into a new meet record.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` for a bad slug, an empty name or an
    /// unparseable date.
    pub fn to_meet(&self) -> Result<Meet, ApiError> {
        let slug: &str = self.validated_slug()?;
        let name: &str = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput {
                field: String::from("name"),
                message: String::from("Meet name must not be empty"),
            });
        }
        let date: Date = Meet::parse_date(&self.date)?;

        Ok(Meet {
            slug: slug.to_string(),
            name: name.to_string(),
            date,
            location: non_empty(self.location.as_deref()),
            description: non_empty(self.description.as_deref()),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// API request to import one result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// The target meet.
    pub meet: MeetDetails,
    /// The file contents, header line first.
    pub csv: String,
}

/// Result of an import that reached the persistence step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    /// The per-row validation report.
    pub report: ImportReport,
    /// Whether this import created the meet record.
    pub meet_created: bool,
    /// Number of result records written.
    pub persisted: usize,
}

/// Body of a bulk transition request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTransitionRequest {
    /// `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// An athlete whose write failed during a bulk transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionFailure {
    pub slug: String,
    pub reason: String,
}

/// Outcome of a bulk transition.
///
/// `success` is false when any athlete failed; `count` covers only the
/// athletes actually written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTransitionReport {
    pub success: bool,
    pub academic_year: i32,
    pub count: usize,
    /// Names of the athletes written.
    pub affected: Vec<String>,
    pub failed: Vec<TransitionFailure>,
    /// The planned change for each athlete written.
    pub transitions: Vec<AthleteTransition>,
}

/// API request to correct an athlete's graduation year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGraduationYearRequest {
    pub graduation_year: i32,
}

/// API request to replace the current season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSeasonRequest {
    pub year: i32,
    /// Zero-based month (0 = January).
    pub start_month: u8,
    /// Zero-based month (0 = January).
    pub end_month: u8,
}

/// One athlete and its lifecycle classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub slug: String,
    pub name: String,
    pub school_slug: String,
    pub graduation_year: i32,
    /// The stored status, which only bulk graduation changes.
    pub status: AthleteStatus,
    /// `FR`, `SO`, `JR`, `SR`, or `None` outside the active grades.
    pub grade: Option<Grade>,
    pub lifecycle: LifecycleStatus,
}

/// The whole roster classified against one reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStatusResponse {
    #[serde(with = "meet_roster_domain::iso_date")]
    pub reference_date: Date,
    pub academic_year: i32,
    pub athletes: Vec<RosterEntry>,
}
