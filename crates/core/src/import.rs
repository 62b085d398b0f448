// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import planning for meet result files.
//!
//! This module turns raw tabular rows into validated result records and a
//! per-row report without touching storage. Persisting the accepted rows
//! is the caller's job.

use csv::StringRecord;
use meet_roster_domain::{
    FieldError, Gender, RaceResult, parse_distance, parse_duration, parse_gender, parse_place,
    round_to_hundredths, validate_duration_range,
};
use serde::Serialize;

use crate::error::CoreError;

/// Fixed column order of a result file. The header line itself is never read.
pub const RESULT_COLUMNS: [&str; 6] = [
    "athlete_name",
    "school_slug",
    "gender",
    "time",
    "distance",
    "place",
];

/// One data line of a result file, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// The data record number, 1-based, excluding the header.
    ///
    /// Blank lines are skipped and not counted, so after a blank line this
    /// is no longer the file line number minus one.
    pub row_number: usize,
    /// Trimmed, unquoted cell values in file order.
    pub fields: Vec<String>,
}

impl RawRow {
    /// Creates a row from string slices.
    #[must_use]
    pub fn new(row_number: usize, fields: &[&str]) -> Self {
        Self {
            row_number,
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// A single failed field within a row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIssue {
    /// The column that failed, or `row` for whole-row failures.
    pub field: &'static str,
    /// Why it failed.
    pub error: FieldError,
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// A row that was not accepted, with every reason found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRow {
    /// The row number (1-based, excluding header).
    pub row_index: usize,
    /// Human-readable reasons, one per failed field.
    pub reasons: Vec<String>,
}

/// Outcome of validating one batch of rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Validated results, stamped with the batch meet slug.
    pub accepted: Vec<RaceResult>,
    /// Rows that failed validation.
    pub rejected: Vec<RejectedRow>,
    /// Number of data rows seen.
    pub total_rows: usize,
}

impl ImportReport {
    /// Returns true if no row was accepted.
    #[must_use]
    pub const fn has_nothing_to_persist(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Reads result rows from CSV text.
///
/// The first line is a header and is discarded unread. Blank lines are
/// skipped. Quote wrapping is removed and cells are trimmed. Rows of any width are returned so that
/// width errors surface per row during validation.
///
/// # Errors
///
/// Returns `CoreError::MalformedCsv` if the text cannot be read as CSV.
pub fn parse_csv_rows(csv_content: &str) -> Result<Vec<RawRow>, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut rows: Vec<RawRow> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| CoreError::MalformedCsv(e.to_string()))?;
        rows.push(RawRow {
            row_number: idx + 1,
            fields: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

/// Returns the trimmed cell, or `None` when it is empty.
fn cell(fields: &[String], column: usize) -> Option<&str> {
    fields
        .get(column)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Runs an optional field through its parser, recording any failure.
fn parse_optional<T>(
    fields: &[String],
    column: usize,
    parse: impl Fn(&str) -> Result<T, FieldError>,
    issues: &mut Vec<RowIssue>,
) -> Option<T> {
    let raw: &str = cell(fields, column)?;
    match parse(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            issues.push(RowIssue {
                field: RESULT_COLUMNS[column],
                error,
            });
            None
        }
    }
}

fn parse_time(raw: &str) -> Result<f64, FieldError> {
    let seconds: f64 = parse_duration(raw)?;
    validate_duration_range(seconds)?;
    Ok(round_to_hundredths(seconds))
}

/// Validates one raw row into a result for `meet_slug`.
///
/// Width and required-name failures short-circuit the row. Otherwise every
/// optional field is checked and every failure is reported.
///
/// # Errors
///
/// Returns every issue found in the row.
pub fn validate_row(meet_slug: &str, row: &RawRow) -> Result<RaceResult, Vec<RowIssue>> {
    if row.fields.len() != RESULT_COLUMNS.len() {
        return Err(vec![RowIssue {
            field: "row",
            error: FieldError::ColumnCountMismatch {
                expected: RESULT_COLUMNS.len(),
                found: row.fields.len(),
            },
        }]);
    }

    let Some(athlete_name) = cell(&row.fields, 0) else {
        return Err(vec![RowIssue {
            field: RESULT_COLUMNS[0],
            error: FieldError::MissingRequiredField,
        }]);
    };

    let mut issues: Vec<RowIssue> = Vec::new();
    let school_slug: Option<String> = cell(&row.fields, 1).map(str::to_string);
    let gender: Option<Gender> =
        parse_optional(&row.fields, 2, parse_gender, &mut issues).flatten();
    let time_seconds: Option<f64> = parse_optional(&row.fields, 3, parse_time, &mut issues);
    let distance_meters: Option<f64> =
        parse_optional(&row.fields, 4, parse_distance, &mut issues);
    let place: Option<u32> = parse_optional(&row.fields, 5, parse_place, &mut issues);

    if !issues.is_empty() {
        return Err(issues);
    }

    Ok(RaceResult {
        athlete_name: athlete_name.to_string(),
        school_slug,
        meet_slug: meet_slug.to_string(),
        gender,
        time_seconds,
        distance_meters,
        place,
    })
}

/// Validates a whole batch in memory.
///
/// Every row is processed; a failing row never aborts the batch.
#[must_use]
pub fn plan_import(meet_slug: &str, rows: &[RawRow]) -> ImportReport {
    let mut accepted: Vec<RaceResult> = Vec::new();
    let mut rejected: Vec<RejectedRow> = Vec::new();

    for row in rows {
        match validate_row(meet_slug, row) {
            Ok(result) => accepted.push(result),
            Err(issues) => rejected.push(RejectedRow {
                row_index: row.row_number,
                reasons: issues.iter().map(ToString::to_string).collect(),
            }),
        }
    }

    ImportReport {
        accepted,
        rejected,
        total_rows: rows.len(),
    }
}
