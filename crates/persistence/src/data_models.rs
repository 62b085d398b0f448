// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::nodes;

/// One stored document and the path it lives at.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NodeRow {
    pub path: String,
    pub value: String,
}
