// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Month;

use super::helpers::{create_test_athlete, create_test_meet, create_test_result, date};
use crate::{SeasonData, collect_season_data};

#[test]
fn test_collect_season_data_filters_by_meet_year() {
    let meets = vec![
        create_test_meet("fall-opener", date(2024, Month::September, 7)),
        create_test_meet("county-champs", date(2024, Month::October, 26)),
        create_test_meet("last-year", date(2023, Month::October, 28)),
    ];
    let results = vec![
        create_test_result("jane runner", "fall-opener"),
        create_test_result("jane runner", "county-champs"),
        create_test_result("sam sprinter", "county-champs"),
        create_test_result("old timer", "last-year"),
    ];
    let athletes = vec![
        create_test_athlete("jane-runner", 2026),
        create_test_athlete("sam-sprinter", 2027),
        create_test_athlete("old-timer", 2024),
        create_test_athlete("no-results", 2026),
    ];

    let data: SeasonData = collect_season_data(2024, meets, results, athletes);

    assert_eq!(data.year, 2024);
    assert_eq!(data.meet_count, 2);
    assert_eq!(data.result_count, 3);
    assert_eq!(data.athlete_count, 2);
    let names: Vec<&str> = data.athletes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["jane runner", "sam sprinter"]);
}

#[test]
fn test_collect_season_data_with_no_meets_is_empty() {
    let data: SeasonData = collect_season_data(
        2030,
        vec![create_test_meet("fall-opener", date(2024, Month::September, 7))],
        vec![create_test_result("jane runner", "fall-opener")],
        vec![create_test_athlete("jane-runner", 2026)],
    );
    assert_eq!(data.meet_count, 0);
    assert_eq!(data.result_count, 0);
    assert_eq!(data.athlete_count, 0);
}
