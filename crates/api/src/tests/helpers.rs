// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use meet_roster_domain::{Athlete, Gender};
use meet_roster_persistence::{MemoryStore, PersistenceError, Store, mutations};
use serde_json::{Map, Value};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

use crate::{ImportRequest, MeetDetails};

pub const HEADER: &str = "athlete_name,school_slug,gender,time,distance,place\n";

/// A reference date in academic year 2025.
pub const fn reference_2025() -> Date {
    date!(2024 - 10 - 01)
}

pub const fn test_now() -> OffsetDateTime {
    datetime!(2024-10-01 15:00 UTC)
}

pub fn create_test_athlete(slug: &str, graduation_year: i32) -> Athlete {
    Athlete::new(
        slug,
        &slug.replace('-', " "),
        "lincoln-high",
        Some(Gender::M),
        graduation_year,
    )
}

pub async fn seed_athletes<S: Store>(store: &S, athletes: &[(&str, i32)]) {
    for (slug, year) in athletes {
        mutations::save_athlete(store, &create_test_athlete(slug, *year))
            .await
            .unwrap();
    }
}

pub fn create_import_request(meet_slug: &str, rows: &str) -> ImportRequest {
    ImportRequest {
        meet: MeetDetails {
            slug: meet_slug.to_string(),
            name: "County Championships".to_string(),
            date: "2024-10-12".to_string(),
            location: Some("Riverside Park".to_string()),
            description: None,
        },
        csv: format!("{HEADER}{rows}"),
    }
}

/// A store that fails chosen calls and otherwise behaves like `MemoryStore`.
#[derive(Default)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    failing_updates: Vec<String>,
    vanishing: Vec<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails `update` calls addressed to exactly `path`.
    pub fn fail_updates_to(mut self, path: &str) -> Self {
        self.failing_updates.push(path.to_string());
        self
    }

    /// Deletes `path` from the backing store when it is read directly, as
    /// if another operator removed it after a broader read.
    pub fn vanish_on_read(mut self, path: &str) -> Self {
        self.vanishing.push(path.to_string());
        self
    }

    pub const fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub const fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn unavailable() -> PersistenceError {
        PersistenceError::DatabaseError("disk I/O error".to_string())
    }
}

impl Store for FaultyStore {
    async fn get(&self, path: &str) -> Result<Option<Value>, PersistenceError> {
        if self.fail_reads {
            return Err(Self::unavailable());
        }
        if self.vanishing.iter().any(|p| p == path) {
            self.inner.remove(path).await?;
        }
        self.inner.get(path).await
    }

    async fn query(
        &self,
        path: &str,
        field: &str,
        equals: &Value,
    ) -> Result<Vec<(String, Value)>, PersistenceError> {
        if self.fail_reads {
            return Err(Self::unavailable());
        }
        self.inner.query(path, field, equals).await
    }

    async fn set(&self, path: &str, value: Value) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        self.inner.set(path, value).await
    }

    async fn update(&self, path: &str, fields: Map<String, Value>) -> Result<(), PersistenceError> {
        if self.fail_writes || self.failing_updates.iter().any(|p| p == path) {
            return Err(Self::unavailable());
        }
        self.inner.update(path, fields).await
    }

    async fn append(&self, path: &str) -> Result<String, PersistenceError> {
        self.inner.append(path).await
    }

    async fn remove(&self, path: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(Self::unavailable());
        }
        self.inner.remove(path).await
    }
}
