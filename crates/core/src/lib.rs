// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod import;
mod lifecycle;
mod season;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use import::{
    ImportReport, RESULT_COLUMNS, RawRow, RejectedRow, RowIssue, parse_csv_rows, plan_import,
    validate_row,
};
pub use lifecycle::{
    AthleteTransition, TransitionKind, archive_snapshot, plan_advance, plan_correction,
    plan_graduation,
};
pub use season::{SeasonData, collect_season_data};
