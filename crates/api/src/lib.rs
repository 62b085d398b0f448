// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator-facing operations for Meet Roster.
//!
//! Every operation takes the store handle, and where relevant the
//! reference date and the "now" timestamp, as explicit parameters. Nothing
//! here reads global state, so operations run unchanged against the
//! in-memory store in tests.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod import;
mod lifecycle;
mod request_response;
mod season;

#[cfg(test)]
mod tests;

pub use error::{ApiError, athlete_not_found, translate_core_error, translate_domain_error};
pub use import::{import_results, preview_import};
pub use lifecycle::{
    advance_all_athletes, graduate_all_seniors, resolve_reference_date, roster_status,
    set_graduation_year,
};
pub use request_response::{
    BulkTransitionReport, BulkTransitionRequest, ImportOutcome, ImportRequest, MeetDetails,
    RosterEntry, RosterStatusResponse, SetGraduationYearRequest, SetSeasonRequest,
    TransitionFailure,
};
pub use season::{
    archive_season, get_current_season, get_season_data, list_archived_seasons,
    set_current_season,
};
