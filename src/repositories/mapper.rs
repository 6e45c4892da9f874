// src/repositories/mapper.rs
//
// Entity mapper contract
//
// The mapper is the only entity-specific code in the persistence layer.
// It translates one entity type to and from rows of its table and does
// nothing else: no I/O, no validation, no business rules.

use rusqlite::types::Value;
use rusqlite::Row;

use super::schema::TableSchema;
use crate::domain::Entity;
use crate::error::AppResult;

/// Ordered column -> value assignments for one statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowValues {
    assignments: Vec<(&'static str, Value)>,
}

impl RowValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment (builder style)
    pub fn with(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.assignments.push((column, value.into()));
        self
    }

    pub fn push(&mut self, column: &'static str, value: impl Into<Value>) {
        self.assignments.push((column, value.into()));
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignments.iter().map(|(column, _)| *column)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.assignments.iter().map(|(_, value)| value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.assignments
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Per-entity translation between domain values and table rows.
///
/// Implementations are zero-sized markers; the generic repository is
/// parameterized over them.
pub trait EntityMapper: Send + Sync + 'static {
    type Entity: Entity + Send + Sync + 'static;

    /// Table this mapper reads and writes
    const SCHEMA: &'static TableSchema;

    /// Assignments for an INSERT. Includes the primary key only when the
    /// entity already carries an identity.
    fn to_insert_row(entity: &Self::Entity) -> AppResult<RowValues>;

    /// Assignments for a full-record UPDATE: every mutable column, never the key.
    fn to_update_row(entity: &Self::Entity) -> AppResult<RowValues>;

    /// Rebuilds a complete entity, identity included, from a selected row.
    ///
    /// Returns `rusqlite::Error` so it can be handed straight to `query_map`.
    fn to_domain(row: &Row<'_>) -> rusqlite::Result<Self::Entity>;
}

/// Wraps a decoding failure so it travels through rusqlite's row callbacks
pub(crate) fn conversion_error(
    column: &str,
    message: impl Into<String>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("column '{}': {}", column, message.into()),
        )),
    )
}
