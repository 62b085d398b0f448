// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use meet_roster_domain::{Athlete, Meet, RaceResult};
use serde::Serialize;
use std::collections::HashSet;

/// Read-only view of everything that happened in one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonData {
    pub year: i32,
    pub meet_count: usize,
    pub result_count: usize,
    pub athlete_count: usize,
    pub meets: Vec<Meet>,
    pub results: Vec<RaceResult>,
    pub athletes: Vec<Athlete>,
}

/// Filters meets to those dated in `year`, results to those referencing one
/// of those meets, and athletes to those named in the filtered results.
///
/// Results reference athletes by name only, so athletes are matched on
/// their trimmed name.
#[must_use]
pub fn collect_season_data(
    year: i32,
    meets: Vec<Meet>,
    results: Vec<RaceResult>,
    athletes: Vec<Athlete>,
) -> SeasonData {
    let meets: Vec<Meet> = meets.into_iter().filter(|m| m.date.year() == year).collect();
    let meet_slugs: HashSet<&str> = meets.iter().map(|m| m.slug.as_str()).collect();

    let results: Vec<RaceResult> = results
        .into_iter()
        .filter(|r| meet_slugs.contains(r.meet_slug.as_str()))
        .collect();
    let athlete_names: HashSet<&str> = results.iter().map(|r| r.athlete_name.trim()).collect();

    let athletes: Vec<Athlete> = athletes
        .into_iter()
        .filter(|a| athlete_names.contains(a.name.trim()))
        .collect();

    SeasonData {
        year,
        meet_count: meets.len(),
        result_count: results.len(),
        athlete_count: athletes.len(),
        meets,
        results,
        athletes,
    }
}
