// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end result import.
//!
//! Validation runs entirely in memory before the first store call. The
//! accepted rows are then written in one batch. Imports are not
//! idempotent: importing the same file twice appends every row twice.
//! Callers that need exactly-once behaviour must track their own batch
//! identifiers.

use meet_roster::{ImportReport, RawRow, parse_csv_rows, plan_import};
use meet_roster_persistence::{Store, mutations};
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::request_response::{ImportOutcome, ImportRequest};

fn validate_batch(request: &ImportRequest) -> Result<(&str, ImportReport), ApiError> {
    let slug: &str = request.meet.validated_slug()?;
    let rows: Vec<RawRow> = parse_csv_rows(&request.csv)?;
    let report: ImportReport = plan_import(slug, &rows);

    for rejected in &report.rejected {
        warn!(
            meet = %slug,
            row = rejected.row_index,
            reasons = %rejected.reasons.join("; "),
            "Rejected import row"
        );
    }

    Ok((slug, report))
}

/// Validates an import without writing anything.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the meet slug is invalid or the file
/// cannot be read as CSV. Row failures are reported, not returned. Meet
/// name and date are not checked because the meet may already exist.
pub fn preview_import(request: &ImportRequest) -> Result<ImportReport, ApiError> {
    let (_, report) = validate_batch(request)?;
    Ok(report)
}

/// Validates and persists one result file.
///
/// The meet is created only if its slug is new; otherwise the supplied
/// details are ignored and need not be valid. When no row is accepted
/// nothing is written, the meet included.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid slug, unreadable CSV, or
/// invalid details for a new meet, and `ApiError::PersistenceFailure` if any store call fails. After a
/// persistence failure no accepted row is guaranteed to be written.
pub async fn import_results<S: Store>(
    store: &S,
    request: &ImportRequest,
) -> Result<ImportOutcome, ApiError> {
    let (slug, report) = validate_batch(request)?;

    if report.has_nothing_to_persist() {
        info!(
            meet = %slug,
            total_rows = report.total_rows,
            "Import accepted no rows, nothing persisted"
        );
        return Ok(ImportOutcome {
            report,
            meet_created: false,
            persisted: 0,
        });
    }

    let meet_created: bool =
        mutations::create_meet_if_absent(store, slug, || request.meet.to_meet())
            .await
            .inspect_err(|e| match e {
                ApiError::PersistenceFailure { .. } => {
                    error!(meet = %slug, error = %e, "Failed to create meet");
                }
                _ => warn!(meet = %slug, error = %e, "Rejected new meet details"),
            })?;

    let written: Vec<String> = mutations::append_results(store, &report.accepted)
        .await
        .map_err(|e| {
            error!(meet = %slug, error = %e, "Failed to persist import batch");
            ApiError::from(e)
        })?;

    info!(
        meet = %slug,
        meet_created,
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "Imported results"
    );

    Ok(ImportOutcome {
        report,
        meet_created,
        persisted: written.len(),
    })
}
