// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{
    ArchivedSeason, Athlete, AthleteStatus, DomainError, Gender, Meet, RaceResult, Season,
    validate_slug,
};

#[test]
fn test_validate_slug() {
    assert!(validate_slug("central-high").is_ok());
    assert!(matches!(validate_slug(""), Err(DomainError::InvalidSlug(_))));
    assert!(matches!(
        validate_slug("  "),
        Err(DomainError::InvalidSlug(_))
    ));
    assert!(matches!(
        validate_slug("a/b"),
        Err(DomainError::InvalidSlug(_))
    ));
}

#[test]
fn test_season_rejects_months_outside_zero_to_eleven() {
    assert!(Season::new(2025, 0, 11).is_ok());
    assert_eq!(
        Season::new(2025, 12, 5),
        Err(DomainError::InvalidSeasonMonth {
            field: "startMonth",
            month: 12,
        })
    );
    assert_eq!(
        Season::new(2025, 7, 12),
        Err(DomainError::InvalidSeasonMonth {
            field: "endMonth",
            month: 12,
        })
    );
}

#[test]
fn test_athlete_document_uses_camel_case() {
    let athlete: Athlete = Athlete::new(
        "jane-runner",
        "Jane Runner",
        "central-high",
        Some(Gender::F),
        2026,
    );
    let value: serde_json::Value = serde_json::to_value(&athlete).unwrap();
    assert_eq!(value["graduationYear"], 2026);
    assert_eq!(value["schoolSlug"], "central-high");
    assert_eq!(value["status"], "active");
    assert_eq!(value["gender"], "F");
    assert!(value.get("advancedAt").is_none());
}

#[test]
fn test_athlete_defaults_when_fields_absent() {
    let value: serde_json::Value = serde_json::json!({
        "name": "Sam Sprinter",
        "graduationYear": 2027,
    });
    let athlete: Athlete = serde_json::from_value(value).unwrap();
    assert_eq!(athlete.status, AthleteStatus::Active);
    assert_eq!(athlete.gender, None);
    assert!(athlete.slug.is_empty());
}

#[test]
fn test_athlete_status_from_str() {
    assert_eq!(
        "graduated".parse::<AthleteStatus>().unwrap(),
        AthleteStatus::Graduated
    );
    assert!("retired".parse::<AthleteStatus>().is_err());
}

#[test]
fn test_meet_date_is_stored_as_iso_date() {
    let meet: Meet = Meet {
        slug: String::from("county-champs"),
        name: String::from("County Championships"),
        date: Date::from_calendar_date(2024, Month::October, 12).unwrap(),
        location: None,
        description: None,
    };
    let value: serde_json::Value = serde_json::to_value(&meet).unwrap();
    assert_eq!(value["date"], "2024-10-12");
    assert!(value.get("location").is_none());

    let parsed: Meet = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, meet);
}

#[test]
fn test_meet_parse_date() {
    assert_eq!(
        Meet::parse_date("2024-10-12").unwrap(),
        Date::from_calendar_date(2024, Month::October, 12).unwrap()
    );
    assert!(matches!(
        Meet::parse_date("10/12/2024"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_race_result_optional_fields_default_to_none() {
    let value: serde_json::Value = serde_json::json!({
        "athleteName": "Jane Runner",
        "meetSlug": "county-champs",
    });
    let result: RaceResult = serde_json::from_value(value).unwrap();
    assert_eq!(result.time_seconds, None);
    assert_eq!(result.place, None);
    assert_eq!(result.school_slug, None);
}

#[test]
fn test_archived_season_flattens_season_fields() {
    let archived: ArchivedSeason = ArchivedSeason {
        season: Season::new(2025, 7, 10).unwrap(),
        archived_at: time::macros::datetime!(2025-06-30 12:00 UTC),
    };
    let value: serde_json::Value = serde_json::to_value(&archived).unwrap();
    assert_eq!(value["year"], 2025);
    assert_eq!(value["startMonth"], 7);
    assert_eq!(value["endMonth"], 10);
    assert_eq!(value["archivedAt"], "2025-06-30T12:00:00Z");
}
