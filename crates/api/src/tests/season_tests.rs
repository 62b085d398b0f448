// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use meet_roster::SeasonData;
use meet_roster_domain::{ArchivedSeason, Season};
use meet_roster_persistence::MemoryStore;
use time::macros::datetime;

use super::helpers::{create_import_request, seed_athletes, test_now};
use crate::{
    ApiError, ImportRequest, SetSeasonRequest, archive_season, get_current_season,
    get_season_data, import_results, list_archived_seasons, set_current_season,
};

const fn season_request(year: i32) -> SetSeasonRequest {
    SetSeasonRequest {
        year,
        start_month: 7,
        end_month: 5,
    }
}

#[tokio::test]
async fn test_current_season_is_missing_until_set() {
    let store: MemoryStore = MemoryStore::new();
    assert!(matches!(
        get_current_season(&store).await,
        Err(ApiError::ResourceNotFound { .. })
    ));

    set_current_season(&store, season_request(2025))
        .await
        .unwrap();
    set_current_season(&store, season_request(2026))
        .await
        .unwrap();

    let current: Season = get_current_season(&store).await.unwrap();
    assert_eq!(current, Season::new(2026, 7, 5).unwrap());
}

#[tokio::test]
async fn test_set_current_season_rejects_bad_month() {
    let store: MemoryStore = MemoryStore::new();
    let request: SetSeasonRequest = SetSeasonRequest {
        year: 2025,
        start_month: 12,
        end_month: 5,
    };

    match set_current_season(&store, request).await {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "startMonth"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn test_archive_copies_current_without_rotating() {
    let store: MemoryStore = MemoryStore::new();
    set_current_season(&store, season_request(2025))
        .await
        .unwrap();

    let archived: ArchivedSeason = archive_season(&store, 2025, test_now()).await.unwrap();

    assert_eq!(archived.season, Season::new(2025, 7, 5).unwrap());
    assert_eq!(archived.archived_at, test_now());
    assert_eq!(
        get_current_season(&store).await.unwrap(),
        Season::new(2025, 7, 5).unwrap()
    );
    assert_eq!(list_archived_seasons(&store).await.unwrap(), vec![archived]);
}

#[tokio::test]
async fn test_archived_year_is_immutable() {
    let store: MemoryStore = MemoryStore::new();
    set_current_season(&store, season_request(2025))
        .await
        .unwrap();
    archive_season(&store, 2025, test_now()).await.unwrap();

    set_current_season(&store, season_request(2026))
        .await
        .unwrap();
    let again: Result<ArchivedSeason, ApiError> =
        archive_season(&store, 2025, datetime!(2025-07-01 00:00 UTC)).await;

    assert!(matches!(again, Err(ApiError::DomainRuleViolation { .. })));
    let archived: Vec<ArchivedSeason> = list_archived_seasons(&store).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].season.year, 2025);
}

#[tokio::test]
async fn test_archive_without_current_season() {
    let store: MemoryStore = MemoryStore::new();
    assert!(matches!(
        archive_season(&store, 2025, test_now()).await,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[tokio::test]
async fn test_season_data_filters_by_meet_year() {
    let store: MemoryStore = MemoryStore::new();
    seed_athletes(&store, &[("jane-runner", 2026), ("omar-fast", 2025), ("ann-lee", 2027)]).await;

    let fall: ImportRequest = create_import_request(
        "county-champs",
        "jane runner,lincoln-high,F,18:30,5000,1\nomar fast,lincoln-high,M,17:10,5000,1\n",
    );
    import_results(&store, &fall).await.unwrap();

    let mut spring: ImportRequest =
        create_import_request("spring-relays", "ann lee,lincoln-high,F,5:01,1600,2\n");
    spring.meet.date = "2025-04-05".to_string();
    import_results(&store, &spring).await.unwrap();

    let data: SeasonData = get_season_data(&store, 2024).await.unwrap();

    assert_eq!(data.meet_count, 1);
    assert_eq!(data.meets[0].slug, "county-champs");
    assert_eq!(data.result_count, 2);
    assert_eq!(data.athlete_count, 2);
    let names: Vec<&str> = data.athletes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["jane runner", "omar fast"]);

    let empty: SeasonData = get_season_data(&store, 2019).await.unwrap();
    assert_eq!(empty.meet_count, 0);
    assert!(empty.results.is_empty());
}
