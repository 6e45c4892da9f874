// src/repositories/statements.rs
//
// SQL rendered from a table schema. Explicit SQL only, one statement each.

use super::schema::{quote, TableSchema};

/// `"id", "name", ...` - key first, then data columns in declaration order
pub fn select_list(schema: &TableSchema) -> String {
    std::iter::once(schema.primary_key)
        .chain(schema.column_names())
        .map(quote)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn select_by_id(schema: &TableSchema) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?1",
        select_list(schema),
        quote(schema.name),
        quote(schema.primary_key)
    )
}

/// Full scan, no ORDER BY: rows come back in whatever order the store keeps them
pub fn select_all(schema: &TableSchema) -> String {
    format!("SELECT {} FROM {}", select_list(schema), quote(schema.name))
}

pub fn insert<'a, I>(schema: &TableSchema, columns: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let columns: Vec<String> = columns.into_iter().map(quote).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("?{}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote(schema.name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Overwrites the given columns; the key is bound last
pub fn update_by_id<'a, I>(schema: &TableSchema, columns: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let assignments: Vec<String> = columns
        .into_iter()
        .enumerate()
        .map(|(index, column)| format!("{} = ?{}", quote(column), index + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quote(schema.name),
        assignments.join(", "),
        quote(schema.primary_key),
        assignments.len() + 1
    )
}

pub fn delete_by_id(schema: &TableSchema) -> String {
    format!(
        "DELETE FROM {} WHERE {} = ?1",
        quote(schema.name),
        quote(schema.primary_key)
    )
}

pub fn count(schema: &TableSchema) -> String {
    format!("SELECT COUNT(*) FROM {}", quote(schema.name))
}
