// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Meet Roster.
//!
//! Everything above this crate talks to storage through the [`Store`]
//! trait: a key-path addressable document store with no relational joins
//! and no transactions across paths.
//!
//! ## Stores
//!
//! - [`MemoryStore`] keeps the document tree in process. It is the fixture
//!   for unit tests throughout the workspace.
//! - [`SqliteStore`] keeps documents in a single `SQLite` table managed by
//!   Diesel. Migrations are embedded and run on open.
//!
//! ## Key Layout
//!
//! - `schools/{slug}`
//! - `athletes/{slug}`
//! - `meets/{slug}`
//! - `results/{key}` (keys from [`Store::append`])
//! - `seasons/current`
//! - `seasons/archived/{year}`
//!
//! The [`queries`] and [`mutations`] modules read and write these records
//! as domain types.

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

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod memory;
pub mod mutations;
pub mod paths;
pub mod queries;
mod sqlite;
mod store;
mod tree;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::Store;
