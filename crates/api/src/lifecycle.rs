// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk athlete transitions and single-athlete corrections.
//!
//! No marker records that a transition already ran this academic year.
//! Running `advance_all_athletes` twice in one season decrements twice,
//! and two operators running a transition concurrently can both apply
//! it. Invocations must be serialized by the caller.

use futures::future::join_all;
use meet_roster::{AthleteTransition, plan_advance, plan_correction, plan_graduation};
use meet_roster_domain::{
    Athlete, Grade, LifecycleStatus, academic_year, classify, nominal_graduation_date,
};
use meet_roster_persistence::{PersistenceError, Store, mutations, queries};
use time::{Date, OffsetDateTime};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, athlete_not_found};
use crate::request_response::{
    BulkTransitionReport, RosterEntry, RosterStatusResponse, TransitionFailure,
};

/// Parses an optional `YYYY-MM-DD` reference date, defaulting to `today`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the date does not parse.
pub fn resolve_reference_date(input: Option<&str>, today: Date) -> Result<Date, ApiError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Ok(meet_roster_domain::Meet::parse_date(raw)?),
        None => Ok(today),
    }
}

/// Writes every planned transition, waiting for all writes to settle.
async fn apply_all<S: Store>(
    store: &S,
    academic_year: i32,
    transitions: Vec<AthleteTransition>,
    now: OffsetDateTime,
) -> BulkTransitionReport {
    let outcomes: Vec<Result<(), PersistenceError>> = join_all(
        transitions
            .iter()
            .map(|t| mutations::apply_transition(store, t, now)),
    )
    .await;

    let mut written: Vec<AthleteTransition> = Vec::with_capacity(transitions.len());
    let mut failed: Vec<TransitionFailure> = Vec::new();
    for (transition, outcome) in transitions.into_iter().zip(outcomes) {
        match outcome {
            Ok(()) => {
                debug!(
                    athlete = %transition.slug,
                    from = transition.from_year,
                    to = transition.to_year,
                    "Applied transition"
                );
                written.push(transition);
            }
            Err(PersistenceError::NotFound(_)) => {
                warn!(
                    athlete = %transition.slug,
                    "Athlete removed before transition was written"
                );
                failed.push(TransitionFailure {
                    reason: athlete_not_found(&transition.slug).to_string(),
                    slug: transition.slug,
                });
            }
            Err(e) => {
                warn!(athlete = %transition.slug, error = %e, "Transition write failed");
                failed.push(TransitionFailure {
                    slug: transition.slug,
                    reason: e.to_string(),
                });
            }
        }
    }

    BulkTransitionReport {
        success: failed.is_empty(),
        academic_year,
        count: written.len(),
        affected: written.iter().map(|t| t.name.clone()).collect(),
        failed,
        transitions: written,
    }
}

async fn load_roster<S: Store>(store: &S) -> Result<Vec<Athlete>, ApiError> {
    queries::load_athletes(store).await.map_err(|e| {
        error!(error = %e, "Failed to load athletes");
        ApiError::from(e)
    })
}

/// Moves every athlete still in school one grade up.
///
/// Every athlete whose graduation year is at or after the current academic
/// year has it decremented by exactly one and is stamped `advancedAt`.
/// Athletes already past graduation are untouched.
///
/// # Errors
///
/// Returns `ApiError::PersistenceFailure` only if the roster cannot be
/// read. Individual write failures, including athletes removed since the
/// roster was read, are listed in the report.
pub async fn advance_all_athletes<S: Store>(
    store: &S,
    reference_date: Date,
    now: OffsetDateTime,
) -> Result<BulkTransitionReport, ApiError> {
    let current: i32 = academic_year(reference_date);
    let athletes: Vec<Athlete> = load_roster(store).await?;
    let transitions: Vec<AthleteTransition> = plan_advance(&athletes, reference_date);

    let report: BulkTransitionReport = apply_all(store, current, transitions, now).await;
    info!(
        academic_year = current,
        count = report.count,
        failed = report.failed.len(),
        "Advanced athletes"
    );
    Ok(report)
}

/// Graduates every senior of the current academic year.
///
/// Seniors get status `graduated`, their graduation year decremented by
/// one and a `graduatedAt` stamp. Everyone else is untouched.
///
/// # Errors
///
/// Returns `ApiError::PersistenceFailure` only if the seniors cannot be
/// read. Individual write failures are listed in the report.
pub async fn graduate_all_seniors<S: Store>(
    store: &S,
    reference_date: Date,
    now: OffsetDateTime,
) -> Result<BulkTransitionReport, ApiError> {
    let current: i32 = academic_year(reference_date);
    let seniors: Vec<Athlete> = queries::load_athletes_graduating(store, current)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load seniors");
            ApiError::from(e)
        })?;
    let transitions: Vec<AthleteTransition> = plan_graduation(&seniors, reference_date);

    let report: BulkTransitionReport = apply_all(store, current, transitions, now).await;
    info!(
        academic_year = current,
        count = report.count,
        failed = report.failed.len(),
        "Graduated seniors"
    );
    Ok(report)
}

/// Corrects one athlete's graduation year.
///
/// This is the only operation that may raise a graduation year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown slug,
/// `ApiError::InvalidInput` for a year outside the calendar range, and
/// `ApiError::PersistenceFailure` if the store fails.
pub async fn set_graduation_year<S: Store>(
    store: &S,
    slug: &str,
    graduation_year: i32,
    reference_date: Date,
    now: OffsetDateTime,
) -> Result<AthleteTransition, ApiError> {
    nominal_graduation_date(graduation_year)?;

    let athlete: Athlete = queries::load_athlete(store, slug)
        .await?
        .ok_or_else(|| athlete_not_found(slug))?;

    let transition: AthleteTransition = plan_correction(&athlete, graduation_year, reference_date);
    mutations::apply_transition(store, &transition, now)
        .await
        .map_err(|e| match e {
            PersistenceError::NotFound(_) => athlete_not_found(slug),
            other => ApiError::from(other),
        })?;

    info!(
        athlete = %slug,
        from = transition.from_year,
        to = transition.to_year,
        status = %transition.status,
        "Corrected graduation year"
    );
    Ok(transition)
}

/// Classifies every athlete against `reference_date`.
///
/// # Errors
///
/// Returns `ApiError::PersistenceFailure` if the roster cannot be read and
/// `ApiError::InvalidInput` if a stored graduation year cannot be dated.
pub async fn roster_status<S: Store>(
    store: &S,
    reference_date: Date,
) -> Result<RosterStatusResponse, ApiError> {
    let athletes: Vec<Athlete> = load_roster(store).await?;

    let mut entries: Vec<RosterEntry> = Vec::with_capacity(athletes.len());
    for athlete in athletes {
        let lifecycle: LifecycleStatus = classify(&athlete, reference_date)?;
        let grade: Option<Grade> = match lifecycle {
            LifecycleStatus::Active { grade, .. } => Some(grade),
            LifecycleStatus::Senior { .. } => Some(Grade::Senior),
            LifecycleStatus::Graduated { .. } | LifecycleStatus::Unknown { .. } => None,
        };
        entries.push(RosterEntry {
            slug: athlete.slug,
            name: athlete.name,
            school_slug: athlete.school_slug,
            graduation_year: athlete.graduation_year,
            status: athlete.status,
            grade,
            lifecycle,
        });
    }

    Ok(RosterStatusResponse {
        reference_date,
        academic_year: academic_year(reference_date),
        athletes: entries,
    })
}
