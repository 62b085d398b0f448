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

mod calendar;
mod error;
mod normalize;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    ACADEMIC_YEAR_START, GRADUATION_DAY, GRADUATION_MONTH, Grade, LifecycleStatus, academic_year,
    classify, nominal_graduation_date,
};
pub use error::{DomainError, FieldError};
pub use normalize::{
    MAX_DURATION_SECONDS, format_duration, parse_decimal, parse_distance, parse_duration,
    parse_gender, parse_place, round_to_hundredths, validate_duration_range,
};
pub use types::{
    ArchivedSeason, Athlete, AthleteStatus, DATE_FORMAT, Gender, Meet, RaceResult, School, Season,
    iso_date, validate_slug,
};
