// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed reads over the store.
//!
//! Stored documents may omit their own slug; it is filled from the key.

use meet_roster_domain::{ArchivedSeason, Athlete, Meet, RaceResult, School, Season};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PersistenceError;
use crate::paths;
use crate::store::Store;

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, PersistenceError> {
    serde_json::from_value(value)
        .map_err(|e| PersistenceError::SerializationError(format!("{path}: {e}")))
}

fn decode_children<T: DeserializeOwned>(
    parent: &str,
    children: Vec<(String, Value)>,
) -> Result<Vec<(String, T)>, PersistenceError> {
    children
        .into_iter()
        .map(|(key, value)| {
            let record: T = decode(&format!("{parent}/{key}"), value)?;
            Ok((key, record))
        })
        .collect()
}

fn object_children(node: Option<Value>) -> Vec<(String, Value)> {
    match node {
        Some(Value::Object(map)) => map.into_iter().collect(),
        _ => Vec::new(),
    }
}

fn with_athlete_slug((key, mut athlete): (String, Athlete)) -> Athlete {
    if athlete.slug.is_empty() {
        athlete.slug = key;
    }
    athlete
}

fn with_meet_slug((key, mut meet): (String, Meet)) -> Meet {
    if meet.slug.is_empty() {
        meet.slug = key;
    }
    meet
}

/// Loads every school.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_schools<S: Store>(store: &S) -> Result<Vec<School>, PersistenceError> {
    let node: Option<Value> = store.get(paths::SCHOOLS).await?;
    let schools: Vec<(String, School)> = decode_children(paths::SCHOOLS, object_children(node))?;
    Ok(schools
        .into_iter()
        .map(|(key, mut school)| {
            if school.slug.is_empty() {
                school.slug = key;
            }
            school
        })
        .collect())
}

/// Loads every athlete, ordered by slug.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_athletes<S: Store>(store: &S) -> Result<Vec<Athlete>, PersistenceError> {
    let node: Option<Value> = store.get(paths::ATHLETES).await?;
    let athletes: Vec<(String, Athlete)> =
        decode_children(paths::ATHLETES, object_children(node))?;
    Ok(athletes.into_iter().map(with_athlete_slug).collect())
}

/// Loads one athlete by slug.
///
/// # Errors
///
/// Returns an error if the store fails or the document does not decode.
pub async fn load_athlete<S: Store>(
    store: &S,
    slug: &str,
) -> Result<Option<Athlete>, PersistenceError> {
    let path: String = paths::athlete(slug);
    let Some(value) = store.get(&path).await? else {
        return Ok(None);
    };
    let athlete: Athlete = decode(&path, value)?;
    Ok(Some(with_athlete_slug((slug.to_string(), athlete))))
}

/// Loads the athletes whose graduation year equals `graduation_year`.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_athletes_graduating<S: Store>(
    store: &S,
    graduation_year: i32,
) -> Result<Vec<Athlete>, PersistenceError> {
    let children: Vec<(String, Value)> = store
        .query(paths::ATHLETES, "graduationYear", &Value::from(graduation_year))
        .await?;
    let athletes: Vec<(String, Athlete)> = decode_children(paths::ATHLETES, children)?;
    Ok(athletes.into_iter().map(with_athlete_slug).collect())
}

/// Loads every meet.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_meets<S: Store>(store: &S) -> Result<Vec<Meet>, PersistenceError> {
    let node: Option<Value> = store.get(paths::MEETS).await?;
    let meets: Vec<(String, Meet)> = decode_children(paths::MEETS, object_children(node))?;
    Ok(meets.into_iter().map(with_meet_slug).collect())
}

/// Loads one meet by slug.
///
/// # Errors
///
/// Returns an error if the store fails or the document does not decode.
pub async fn load_meet<S: Store>(store: &S, slug: &str) -> Result<Option<Meet>, PersistenceError> {
    let path: String = paths::meet(slug);
    let Some(value) = store.get(&path).await? else {
        return Ok(None);
    };
    let meet: Meet = decode(&path, value)?;
    Ok(Some(with_meet_slug((slug.to_string(), meet))))
}

/// Loads every result in insertion order.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_results<S: Store>(store: &S) -> Result<Vec<RaceResult>, PersistenceError> {
    let node: Option<Value> = store.get(paths::RESULTS).await?;
    let results: Vec<(String, RaceResult)> =
        decode_children(paths::RESULTS, object_children(node))?;
    Ok(results.into_iter().map(|(_, result)| result).collect())
}

/// Loads the results recorded against one meet.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_results_for_meet<S: Store>(
    store: &S,
    meet_slug: &str,
) -> Result<Vec<RaceResult>, PersistenceError> {
    let children: Vec<(String, Value)> = store
        .query(paths::RESULTS, "meetSlug", &Value::from(meet_slug))
        .await?;
    let results: Vec<(String, RaceResult)> = decode_children(paths::RESULTS, children)?;
    Ok(results.into_iter().map(|(_, result)| result).collect())
}

/// Loads the current season, if one has been set.
///
/// # Errors
///
/// Returns an error if the store fails or the document does not decode.
pub async fn load_current_season<S: Store>(store: &S) -> Result<Option<Season>, PersistenceError> {
    store
        .get(paths::CURRENT_SEASON)
        .await?
        .map(|value| decode(paths::CURRENT_SEASON, value))
        .transpose()
}

/// Loads one archived season.
///
/// # Errors
///
/// Returns an error if the store fails or the document does not decode.
pub async fn load_archived_season<S: Store>(
    store: &S,
    year: i32,
) -> Result<Option<ArchivedSeason>, PersistenceError> {
    let path: String = paths::archived_season(year);
    store
        .get(&path)
        .await?
        .map(|value| decode(&path, value))
        .transpose()
}

/// Loads every archived season, ordered by year.
///
/// # Errors
///
/// Returns an error if the store fails or a document does not decode.
pub async fn load_archived_seasons<S: Store>(
    store: &S,
) -> Result<Vec<ArchivedSeason>, PersistenceError> {
    let node: Option<Value> = store.get(paths::ARCHIVED_SEASONS).await?;
    let archived: Vec<(String, ArchivedSeason)> =
        decode_children(paths::ARCHIVED_SEASONS, object_children(node))?;
    let mut seasons: Vec<ArchivedSeason> = archived.into_iter().map(|(_, s)| s).collect();
    seasons.sort_by_key(|s| s.season.year);
    Ok(seasons)
}
