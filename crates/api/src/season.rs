// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season records and season-scoped reads.
//!
//! Archiving copies the current season; it never clears or rotates it.
//! Operators call `set_current_season` separately to start a new season.

use meet_roster::{SeasonData, archive_snapshot, collect_season_data};
use meet_roster_domain::{ArchivedSeason, Athlete, Meet, RaceResult, Season};
use meet_roster_persistence::{Store, mutations, queries};
use time::OffsetDateTime;
use tracing::info;

use crate::error::ApiError;
use crate::request_response::SetSeasonRequest;

fn no_current_season() -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Season"),
        message: String::from("No current season has been set"),
    }
}

/// Returns the current season.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if none has been set and
/// `ApiError::PersistenceFailure` if the store fails.
pub async fn get_current_season<S: Store>(store: &S) -> Result<Season, ApiError> {
    queries::load_current_season(store)
        .await?
        .ok_or_else(no_current_season)
}

/// Unconditionally replaces the current season.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a month is outside `0..=11` and
/// `ApiError::PersistenceFailure` if the store fails.
pub async fn set_current_season<S: Store>(
    store: &S,
    request: SetSeasonRequest,
) -> Result<Season, ApiError> {
    let season: Season = Season::new(request.year, request.start_month, request.end_month)?;
    mutations::save_current_season(store, &season).await?;
    info!(
        year = season.year,
        start_month = season.start_month,
        end_month = season.end_month,
        "Set current season"
    );
    Ok(season)
}

/// Freezes the current season under `year`.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no current season exists,
/// `ApiError::DomainRuleViolation` if `year` is already archived, and
/// `ApiError::PersistenceFailure` if the store fails.
pub async fn archive_season<S: Store>(
    store: &S,
    year: i32,
    now: OffsetDateTime,
) -> Result<ArchivedSeason, ApiError> {
    let current: Season = get_current_season(store).await?;

    if queries::load_archived_season(store, year).await?.is_some() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("archived_season_immutable"),
            message: format!("Season {year} is already archived"),
        });
    }

    let archived: ArchivedSeason = archive_snapshot(current, now);
    mutations::save_archived_season(store, year, &archived).await?;
    info!(year, "Archived season");
    Ok(archived)
}

/// Lists every archived season, oldest first.
///
/// # Errors
///
/// Returns `ApiError::PersistenceFailure` if the store fails.
pub async fn list_archived_seasons<S: Store>(store: &S) -> Result<Vec<ArchivedSeason>, ApiError> {
    Ok(queries::load_archived_seasons(store).await?)
}

/// Collects the meets dated in `year` with their results and athletes.
///
/// # Errors
///
/// Returns `ApiError::PersistenceFailure` if the store fails.
pub async fn get_season_data<S: Store>(store: &S, year: i32) -> Result<SeasonData, ApiError> {
    let meets: Vec<Meet> = queries::load_meets(store).await?;
    let results: Vec<RaceResult> = queries::load_results(store).await?;
    let athletes: Vec<Athlete> = queries::load_athletes(store).await?;
    Ok(collect_season_data(year, meets, results, athletes))
}
