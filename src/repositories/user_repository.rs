// src/repositories/user_repository.rs
//
// User persistence - roles stored as a JSON array of tags

use std::collections::BTreeSet;

use rusqlite::Row;

use super::crud_repository::SqliteCrudRepository;
use super::mapper::{conversion_error, EntityMapper, RowValues};
use super::schema::{Column, ColumnType, TableSchema};
use crate::domain::{EntityId, User};
use crate::error::AppResult;

pub const USER_TABLE: TableSchema = TableSchema::new(
    "cafe_user",
    "id",
    &[
        Column::new("nickname", ColumnType::Text),
        Column::new("password", ColumnType::Text),
        Column::new("roles", ColumnType::Json),
    ],
);

/// Maps [`User`] to rows of `cafe_user`
pub struct UserMapper;

pub type UserRepository = SqliteCrudRepository<UserMapper>;

impl EntityMapper for UserMapper {
    type Entity = User;

    const SCHEMA: &'static TableSchema = &USER_TABLE;

    fn to_insert_row(user: &User) -> AppResult<RowValues> {
        let mut row = RowValues::new();
        if let Some(id) = user.id {
            row.push("id", id.value());
        }
        row.push("nickname", user.nickname.clone());
        row.push("password", user.password.clone());
        row.push("roles", serde_json::to_string(&user.roles)?);
        Ok(row)
    }

    fn to_update_row(user: &User) -> AppResult<RowValues> {
        Ok(RowValues::new()
            .with("nickname", user.nickname.clone())
            .with("password", user.password.clone())
            .with("roles", serde_json::to_string(&user.roles)?))
    }

    fn to_domain(row: &Row<'_>) -> rusqlite::Result<User> {
        let roles_json: String = row.get("roles")?;
        let roles: BTreeSet<String> = serde_json::from_str(&roles_json)
            .map_err(|e| conversion_error("roles", e.to_string()))?;

        Ok(User {
            id: Some(EntityId::new(row.get("id")?)),
            nickname: row.get("nickname")?,
            password: row.get("password")?,
            roles,
        })
    }
}
