// src/repositories/crud_repository.rs
//
// Generic CRUD repository
//
// CRITICAL RULES:
// - Written once, reused unchanged for every entity type
// - Entity-specific code lives in the mapper, never here
// - Every operation runs in its own transaction scope
// - Nothing is cached; all state lives in the store

use std::marker::PhantomData;
use std::sync::Arc;

use log::debug;
use rusqlite::{params, params_from_iter};

use super::mapper::EntityMapper;
use super::statements;
use crate::db::{ConnectionPool, TransactionProvider};
use crate::domain::{Entity, EntityId};
use crate::error::{AppError, AppResult};

/// The five persistence operations, identical for every entity type
#[cfg_attr(test, mockall::automock)]
pub trait CrudRepository<T: Send + Sync + 'static>: Send + Sync {
    /// Inserts `entity` and returns it with the store-assigned identity
    fn create(&self, entity: T) -> AppResult<T>;

    /// `Ok(None)` when no row has this identity
    fn read(&self, id: EntityId) -> AppResult<Option<T>>;

    /// Every row, in store order
    fn find_all(&self) -> AppResult<Vec<T>>;

    /// Overwrites every mutable column of the row matching `entity`'s identity.
    ///
    /// Fails with `AppError::Precondition` when the entity was never
    /// persisted. Matching no row is not reported.
    fn update(&self, entity: T) -> AppResult<T>;

    /// Removes the row of a persisted entity. Missing rows are not an error.
    fn delete(&self, entity: &T) -> AppResult<()>;

    /// Removes the row with this identity. Missing rows are not an error.
    fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
}

/// SQLite implementation of [`CrudRepository`] for the entity of mapper `M`
pub struct SqliteCrudRepository<M: EntityMapper> {
    transactions: TransactionProvider,
    _mapper: PhantomData<fn() -> M>,
}

impl<M: EntityMapper> SqliteCrudRepository<M> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self::with_provider(TransactionProvider::new(pool))
    }

    pub fn with_provider(transactions: TransactionProvider) -> Self {
        Self {
            transactions,
            _mapper: PhantomData,
        }
    }

    fn require_id(entity: &M::Entity, operation: &str) -> AppResult<EntityId> {
        entity.id().ok_or_else(|| {
            AppError::precondition(format!(
                "{} on {} requires a persisted entity (id is absent)",
                operation,
                M::SCHEMA.name
            ))
        })
    }
}

impl<M: EntityMapper> Clone for SqliteCrudRepository<M> {
    fn clone(&self) -> Self {
        Self::with_provider(self.transactions.clone())
    }
}

impl<M: EntityMapper> CrudRepository<M::Entity> for SqliteCrudRepository<M> {
    fn create(&self, mut entity: M::Entity) -> AppResult<M::Entity> {
        let schema = M::SCHEMA;
        let row = M::to_insert_row(&entity)?;
        schema.check_columns(row.columns(), true)?;
        let sql = statements::insert(schema, row.columns());

        let id = self.transactions.write(|tx| {
            tx.execute(&sql, params_from_iter(row.values()))?;
            Ok(EntityId::from(tx.last_insert_rowid()))
        })?;

        debug!("event=entity_created table={} id={}", schema.name, id);
        entity.assign_id(id);
        Ok(entity)
    }

    fn read(&self, id: EntityId) -> AppResult<Option<M::Entity>> {
        let sql = statements::select_by_id(M::SCHEMA);

        self.transactions.read(|tx| {
            let mut stmt = tx.prepare(&sql)?;
            match stmt.query_row(params![id.value()], M::to_domain) {
                Ok(entity) => Ok(Some(entity)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(AppError::Database(e)),
            }
        })
    }

    fn find_all(&self) -> AppResult<Vec<M::Entity>> {
        let sql = statements::select_all(M::SCHEMA);

        self.transactions.read(|tx| {
            let mut stmt = tx.prepare(&sql)?;
            let entities = stmt
                .query_map([], M::to_domain)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(entities)
        })
    }

    fn update(&self, entity: M::Entity) -> AppResult<M::Entity> {
        let schema = M::SCHEMA;
        let id = Self::require_id(&entity, "update")?;
        let row = M::to_update_row(&entity)?;
        schema.check_columns(row.columns(), false)?;
        let sql = statements::update_by_id(schema, row.columns());

        let key = rusqlite::types::Value::Integer(id.value());
        let rows_affected = self.transactions.write(|tx| {
            Ok(tx.execute(&sql, params_from_iter(row.values().chain(std::iter::once(&key))))?)
        })?;

        debug!(
            "event=entity_updated table={} id={} rows_affected={}",
            schema.name, id, rows_affected
        );
        Ok(entity)
    }

    fn delete(&self, entity: &M::Entity) -> AppResult<()> {
        let id = Self::require_id(entity, "delete")?;
        self.delete_by_id(id)
    }

    fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        let sql = statements::delete_by_id(M::SCHEMA);

        let rows_affected = self
            .transactions
            .write(|tx| Ok(tx.execute(&sql, params![id.value()])?))?;

        debug!(
            "event=entity_deleted table={} id={} rows_affected={}",
            M::SCHEMA.name,
            id,
            rows_affected
        );
        Ok(())
    }
}
