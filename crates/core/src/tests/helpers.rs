// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use meet_roster_domain::{Athlete, AthleteStatus, Meet, RaceResult};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

/// A reference date in academic year 2025.
pub fn reference_2025() -> Date {
    date(2024, Month::October, 1)
}

pub fn create_test_athlete(slug: &str, graduation_year: i32) -> Athlete {
    let name: String = slug.replace('-', " ");
    Athlete::new(slug, &name, "central-high", None, graduation_year)
}

pub fn create_graduated_athlete(slug: &str, graduation_year: i32) -> Athlete {
    let mut athlete: Athlete = create_test_athlete(slug, graduation_year);
    athlete.status = AthleteStatus::Graduated;
    athlete
}

pub fn create_test_meet(slug: &str, meet_date: Date) -> Meet {
    Meet {
        slug: slug.to_string(),
        name: format!("Meet {slug}"),
        date: meet_date,
        location: None,
        description: None,
    }
}

pub fn create_test_result(athlete_name: &str, meet_slug: &str) -> RaceResult {
    RaceResult {
        athlete_name: athlete_name.to_string(),
        school_slug: Some(String::from("central-high")),
        meet_slug: meet_slug.to_string(),
        gender: None,
        time_seconds: Some(1110.45),
        distance_meters: Some(5000.0),
        place: Some(1),
    }
}
