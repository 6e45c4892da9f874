// src/repositories/menu_repository.rs
//
// Menu persistence

use rusqlite::Row;

use super::crud_repository::SqliteCrudRepository;
use super::mapper::{EntityMapper, RowValues};
use super::schema::{Column, ColumnType, TableSchema};
use crate::domain::{EntityId, Menu};
use crate::error::AppResult;

pub const MENU_TABLE: TableSchema = TableSchema::new(
    "cafe_menu",
    "id",
    &[
        Column::new("name", ColumnType::Text),
        Column::new("price", ColumnType::Integer),
        Column::new("category", ColumnType::Text),
        Column::new("image", ColumnType::Text).nullable(),
    ],
);

/// Maps [`Menu`] to rows of `cafe_menu`
pub struct MenuMapper;

pub type MenuRepository = SqliteCrudRepository<MenuMapper>;

impl EntityMapper for MenuMapper {
    type Entity = Menu;

    const SCHEMA: &'static TableSchema = &MENU_TABLE;

    fn to_insert_row(menu: &Menu) -> AppResult<RowValues> {
        let mut row = RowValues::new();
        if let Some(id) = menu.id {
            row.push("id", id.value());
        }
        row.push("name", menu.name.clone());
        row.push("price", menu.price);
        row.push("category", menu.category.clone());
        row.push("image", menu.image.clone());
        Ok(row)
    }

    fn to_update_row(menu: &Menu) -> AppResult<RowValues> {
        Ok(RowValues::new()
            .with("name", menu.name.clone())
            .with("price", menu.price)
            .with("category", menu.category.clone())
            .with("image", menu.image.clone()))
    }

    fn to_domain(row: &Row<'_>) -> rusqlite::Result<Menu> {
        Ok(Menu {
            id: Some(EntityId::new(row.get("id")?)),
            name: row.get("name")?,
            price: row.get("price")?,
            category: row.get("category")?,
            image: row.get("image")?,
        })
    }
}
