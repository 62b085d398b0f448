// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed writes over the store.

use meet_roster::{AthleteTransition, TransitionKind};
use meet_roster_domain::{ArchivedSeason, Athlete, Meet, RaceResult, School, Season};
use serde_json::{Map, Value};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::error::PersistenceError;
use crate::paths;
use crate::store::Store;

/// Writes a school record, replacing any existing one.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub async fn save_school<S: Store>(store: &S, school: &School) -> Result<(), PersistenceError> {
    store
        .set(&paths::school(&school.slug), serde_json::to_value(school)?)
        .await
}

/// Writes an athlete record, replacing any existing one.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub async fn save_athlete<S: Store>(store: &S, athlete: &Athlete) -> Result<(), PersistenceError> {
    store
        .set(&paths::athlete(&athlete.slug), serde_json::to_value(athlete)?)
        .await
}

/// Creates the meet `slug` unless it already exists.
///
/// `build` runs only when the slug is new, so callers validate creation
/// metadata there. Returns true if a meet was written. The existence check
/// and the write are separate calls; concurrent creators of one slug both
/// write and the last one is kept.
///
/// # Errors
///
/// Returns the error from `build`, or an error if the store read or write
/// fails.
pub async fn create_meet_if_absent<S, E, F>(store: &S, slug: &str, build: F) -> Result<bool, E>
where
    S: Store,
    E: From<PersistenceError>,
    F: FnOnce() -> Result<Meet, E>,
{
    let path: String = paths::meet(slug);
    if store.get(&path).await?.is_some() {
        debug!(meet = %slug, "meet already exists, keeping stored metadata");
        return Ok(false);
    }
    let meet: Meet = build()?;
    let value: Value = serde_json::to_value(&meet).map_err(PersistenceError::from)?;
    store.set(&path, value).await?;
    Ok(true)
}

/// Appends results under fresh keys in a single write.
///
/// Returns the key path of every written result, in input order.
///
/// # Errors
///
/// Returns an error if key generation or the write fails. Nothing is
/// written when key generation fails.
pub async fn append_results<S: Store>(
    store: &S,
    results: &[RaceResult],
) -> Result<Vec<String>, PersistenceError> {
    if results.is_empty() {
        return Ok(Vec::new());
    }

    let mut written: Vec<String> = Vec::with_capacity(results.len());
    let mut batch: Map<String, Value> = Map::new();
    for result in results {
        let path: String = store.append(paths::RESULTS).await?;
        batch.insert(
            paths::child_key(&path).to_string(),
            serde_json::to_value(result)?,
        );
        written.push(path);
    }

    store.update(paths::RESULTS, batch).await?;
    Ok(written)
}

fn timestamp(now: OffsetDateTime) -> Result<Value, PersistenceError> {
    now.format(&Rfc3339)
        .map(Value::String)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Writes the fields a transition changes, leaving the rest of the athlete
/// record untouched.
///
/// The record must still exist. A record removed after the transition was
/// planned is reported instead of being recreated from the changed fields
/// alone. The existence check and the write are separate calls.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the athlete record is gone, or
/// an error if the store read or write fails.
pub async fn apply_transition<S: Store>(
    store: &S,
    transition: &AthleteTransition,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let mut fields: Map<String, Value> = Map::new();
    fields.insert("graduationYear".to_string(), Value::from(transition.to_year));
    fields.insert(
        "status".to_string(),
        Value::from(transition.status.as_str()),
    );
    match transition.kind {
        TransitionKind::Advance => {
            fields.insert("advancedAt".to_string(), timestamp(now)?);
        }
        TransitionKind::Graduate => {
            fields.insert("graduatedAt".to_string(), timestamp(now)?);
        }
        TransitionKind::Correction => {}
    }

    let path: String = paths::athlete(&transition.slug);
    if store.get(&path).await?.is_none() {
        return Err(PersistenceError::NotFound(path));
    }
    store.update(&path, fields).await
}

/// Replaces the current season record.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub async fn save_current_season<S: Store>(
    store: &S,
    season: &Season,
) -> Result<(), PersistenceError> {
    store
        .set(paths::CURRENT_SEASON, serde_json::to_value(season)?)
        .await
}

/// Writes an archived season under `year`.
///
/// The key year is independent of the snapshot's own `year` field.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub async fn save_archived_season<S: Store>(
    store: &S,
    year: i32,
    archived: &ArchivedSeason,
) -> Result<(), PersistenceError> {
    store
        .set(&paths::archived_season(year), serde_json::to_value(archived)?)
        .await
}
