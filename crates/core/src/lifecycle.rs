// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season lifecycle transitions.
//!
//! Planning is pure: each function selects the affected athletes and
//! describes the change. No "already applied this academic year" marker
//! exists, so planning an advance twice in one season yields two
//! decrements. Callers must serialize invocations.

use meet_roster_domain::{ArchivedSeason, Athlete, AthleteStatus, Season, academic_year};
use serde::Serialize;
use time::{Date, OffsetDateTime};

/// The kind of change a transition applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionKind {
    /// Grade progression: graduation year minus one, stamps `advancedAt`.
    Advance,
    /// Senior graduation: status `graduated`, graduation year minus one,
    /// stamps `graduatedAt`.
    Graduate,
    /// Manual graduation year correction.
    Correction,
}

/// A planned change to one athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteTransition {
    pub kind: TransitionKind,
    pub slug: String,
    pub name: String,
    pub from_year: i32,
    pub to_year: i32,
    pub status: AthleteStatus,
}

impl AthleteTransition {
    /// Applies this transition to an in-memory athlete record.
    pub fn apply_to(&self, athlete: &mut Athlete, now: OffsetDateTime) {
        athlete.graduation_year = self.to_year;
        athlete.status = self.status;
        match self.kind {
            TransitionKind::Advance => athlete.advanced_at = Some(now),
            TransitionKind::Graduate => athlete.graduated_at = Some(now),
            TransitionKind::Correction => {}
        }
    }
}

/// Selects every athlete whose graduation year is at or after the current
/// academic year and plans a decrement of exactly one.
#[must_use]
pub fn plan_advance(athletes: &[Athlete], reference_date: Date) -> Vec<AthleteTransition> {
    let current: i32 = academic_year(reference_date);
    athletes
        .iter()
        .filter(|a| a.graduation_year >= current)
        .map(|a| AthleteTransition {
            kind: TransitionKind::Advance,
            slug: a.slug.clone(),
            name: a.name.clone(),
            from_year: a.graduation_year,
            to_year: a.graduation_year - 1,
            status: a.status,
        })
        .collect()
}

/// Selects every senior (graduation year equal to the current academic
/// year) and plans graduation.
#[must_use]
pub fn plan_graduation(athletes: &[Athlete], reference_date: Date) -> Vec<AthleteTransition> {
    let current: i32 = academic_year(reference_date);
    athletes
        .iter()
        .filter(|a| a.graduation_year == current)
        .map(|a| AthleteTransition {
            kind: TransitionKind::Graduate,
            slug: a.slug.clone(),
            name: a.name.clone(),
            from_year: a.graduation_year,
            to_year: a.graduation_year - 1,
            status: AthleteStatus::Graduated,
        })
        .collect()
}

/// Plans a manual graduation year correction.
///
/// This is the only transition that may raise a graduation year. A
/// graduated athlete corrected to the current academic year or later is
/// returned to the active roster; any other status is kept.
#[must_use]
pub fn plan_correction(
    athlete: &Athlete,
    graduation_year: i32,
    reference_date: Date,
) -> AthleteTransition {
    let status: AthleteStatus = if athlete.status == AthleteStatus::Graduated
        && graduation_year >= academic_year(reference_date)
    {
        AthleteStatus::Active
    } else {
        athlete.status
    };

    AthleteTransition {
        kind: TransitionKind::Correction,
        slug: athlete.slug.clone(),
        name: athlete.name.clone(),
        from_year: athlete.graduation_year,
        to_year: graduation_year,
        status,
    }
}

/// Freezes the current season for archival.
///
/// The current season is not cleared; rotating to a new season is a
/// separate operation.
#[must_use]
pub const fn archive_snapshot(current: Season, archived_at: OffsetDateTime) -> ArchivedSeason {
    ArchivedSeason {
        season: current,
        archived_at,
    }
}
