// src/repositories/order_repository.rs
//
// Order persistence
//
// Status is stored by name (READY, IN_PROGRESS, ...), the order time as
// ISO-8601 text without offset. References to menu and user are plain ids;
// the store enforces them through foreign keys.

use chrono::NaiveDateTime;
use rusqlite::Row;

use super::crud_repository::SqliteCrudRepository;
use super::mapper::{conversion_error, EntityMapper, RowValues};
use super::menu_repository::MENU_TABLE;
use super::schema::{Column, ColumnType, TableSchema};
use super::user_repository::USER_TABLE;
use crate::domain::{EntityId, Order, OrderStatus};
use crate::error::AppResult;

/// Text layout of `ordered_at`; `%.f` keeps sub-second precision exactly
pub const ORDERED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub const ORDER_TABLE: TableSchema = TableSchema::new(
    "cafe_order",
    "id",
    &[
        Column::new("order_code", ColumnType::Text).unique(),
        Column::new("cafe_menu_id", ColumnType::BigInt).references(&MENU_TABLE),
        Column::new("cafe_user_id", ColumnType::BigInt).references(&USER_TABLE),
        Column::new("price", ColumnType::Integer),
        Column::new("status", ColumnType::Text),
        Column::new("ordered_at", ColumnType::Timestamp),
    ],
);

/// Maps [`Order`] to rows of `cafe_order`
pub struct OrderMapper;

pub type OrderRepository = SqliteCrudRepository<OrderMapper>;

impl OrderMapper {
    fn data_columns(order: &Order, row: &mut RowValues) {
        row.push("order_code", order.order_code.clone());
        row.push("cafe_menu_id", order.menu_id.value());
        row.push("cafe_user_id", order.user_id.value());
        row.push("price", order.price);
        row.push("status", order.status.to_string());
        row.push(
            "ordered_at",
            order.ordered_at.format(ORDERED_AT_FORMAT).to_string(),
        );
    }
}

impl EntityMapper for OrderMapper {
    type Entity = Order;

    const SCHEMA: &'static TableSchema = &ORDER_TABLE;

    fn to_insert_row(order: &Order) -> AppResult<RowValues> {
        let mut row = RowValues::new();
        if let Some(id) = order.id {
            row.push("id", id.value());
        }
        Self::data_columns(order, &mut row);
        Ok(row)
    }

    fn to_update_row(order: &Order) -> AppResult<RowValues> {
        let mut row = RowValues::new();
        Self::data_columns(order, &mut row);
        Ok(row)
    }

    fn to_domain(row: &Row<'_>) -> rusqlite::Result<Order> {
        let status_str: String = row.get("status")?;
        let status = status_str
            .parse::<OrderStatus>()
            .map_err(|e| conversion_error("status", e.to_string()))?;

        let ordered_at_str: String = row.get("ordered_at")?;
        let ordered_at = NaiveDateTime::parse_from_str(&ordered_at_str, ORDERED_AT_FORMAT)
            .map_err(|e| {
                conversion_error(
                    "ordered_at",
                    format!("invalid timestamp '{}': {}", ordered_at_str, e),
                )
            })?;

        Ok(Order {
            id: Some(EntityId::new(row.get("id")?)),
            order_code: row.get("order_code")?,
            menu_id: EntityId::new(row.get("cafe_menu_id")?),
            user_id: EntityId::new(row.get("cafe_user_id")?),
            price: row.get("price")?,
            status,
            ordered_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rusqlite::types::Value;

    fn sample_order() -> Order {
        let ordered_at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 15, 250_000)
            .unwrap();
        Order::new("ORD-1", EntityId::new(3), EntityId::new(4), 1200, ordered_at)
    }

    #[test]
    fn test_insert_row_uses_column_names() {
        let row = OrderMapper::to_insert_row(&sample_order()).unwrap();

        assert_eq!(row.get("cafe_menu_id"), Some(&Value::Integer(3)));
        assert_eq!(row.get("cafe_user_id"), Some(&Value::Integer(4)));
        assert_eq!(row.get("status"), Some(&Value::Text("READY".to_string())));
        assert_eq!(
            row.get("ordered_at"),
            Some(&Value::Text("2024-05-01T09:30:15.250".to_string()))
        );
        assert!(ORDER_TABLE.check_columns(row.columns(), true).is_ok());
    }

    #[test]
    fn test_timestamp_text_roundtrip() {
        let order = sample_order();
        let text = order.ordered_at.format(ORDERED_AT_FORMAT).to_string();
        let parsed = NaiveDateTime::parse_from_str(&text, ORDERED_AT_FORMAT).unwrap();
        assert_eq!(parsed, order.ordered_at);

        let whole_seconds = "2024-05-01T09:30:15";
        assert!(NaiveDateTime::parse_from_str(whole_seconds, ORDERED_AT_FORMAT).is_ok());
    }

    #[test]
    fn test_update_row_rewrites_every_data_column() {
        let mut order = sample_order();
        order.id = Some(EntityId::new(9));
        let row = OrderMapper::to_update_row(&order).unwrap();

        let columns: Vec<_> = row.columns().collect();
        let declared: Vec<_> = ORDER_TABLE.column_names().collect();
        assert_eq!(columns, declared);
    }

    #[test]
    fn test_unknown_status_in_row_is_an_error() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE t (id INTEGER, order_code TEXT, cafe_menu_id INTEGER, cafe_user_id INTEGER,
                             price INTEGER, status TEXT, ordered_at TEXT);
             INSERT INTO t VALUES (1, 'ORD-1', 1, 1, 100, 'SHIPPED', '2024-05-01T09:30:15');",
        )
        .unwrap();

        let result = conn.query_row("SELECT * FROM t", [], OrderMapper::to_domain);
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }
}
