// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod tree_tests;

use meet_roster_domain::{Athlete, Gender, Meet, RaceResult};
use serde_json::{Value, json};
use time::Date;
use time::macros::date;

pub fn create_test_athlete(slug: &str, graduation_year: i32) -> Athlete {
    Athlete::new(
        slug,
        &slug.replace('-', " "),
        "lincoln-high",
        Some(Gender::F),
        graduation_year,
    )
}

pub fn create_test_meet(slug: &str, meet_date: Date) -> Meet {
    Meet {
        slug: slug.to_string(),
        name: format!("{slug} invitational"),
        date: meet_date,
        location: Some("Riverside Park".to_string()),
        description: None,
    }
}

pub fn create_test_result(athlete_name: &str, meet_slug: &str, time_seconds: f64) -> RaceResult {
    RaceResult {
        athlete_name: athlete_name.to_string(),
        school_slug: Some("lincoln-high".to_string()),
        meet_slug: meet_slug.to_string(),
        gender: Some(Gender::F),
        time_seconds: Some(time_seconds),
        distance_meters: Some(5000.0),
        place: Some(1),
    }
}

pub const fn opening_day() -> Date {
    date!(2024 - 09 - 14)
}

pub fn athlete_doc(name: &str, graduation_year: i32) -> Value {
    json!({
        "name": name,
        "schoolSlug": "lincoln-high",
        "gender": "F",
        "graduationYear": graduation_year,
        "status": "active"
    })
}
