//! Models for the name-keyed lookup tables (tags, versions)

use sqlx::FromRow;

/// A row of `tags` or `versions`
#[derive(Debug, Clone, FromRow)]
pub struct NamedModel {
    pub id: i32,
    pub name: String,
}

/// Row returned by an `INSERT .. ON CONFLICT .. RETURNING` upsert
#[derive(Debug, Clone, FromRow)]
pub struct NamedUpsertModel {
    pub id: i32,
    pub name: String,
    /// `xmax = 0`: true when the row was inserted rather than updated
    pub inserted: bool,
}
