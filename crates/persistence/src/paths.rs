// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store key layout.

pub const SCHOOLS: &str = "schools";
pub const ATHLETES: &str = "athletes";
pub const MEETS: &str = "meets";
pub const RESULTS: &str = "results";
pub const CURRENT_SEASON: &str = "seasons/current";
pub const ARCHIVED_SEASONS: &str = "seasons/archived";

#[must_use]
pub fn school(slug: &str) -> String {
    format!("{SCHOOLS}/{slug}")
}

#[must_use]
pub fn athlete(slug: &str) -> String {
    format!("{ATHLETES}/{slug}")
}

#[must_use]
pub fn meet(slug: &str) -> String {
    format!("{MEETS}/{slug}")
}

#[must_use]
pub fn archived_season(year: i32) -> String {
    format!("{ARCHIVED_SEASONS}/{year}")
}

/// Returns the last segment of a key path.
#[must_use]
pub fn child_key(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}
