// src/repositories/schema.rs
//
// Table schema declarations
//
// A `TableSchema` is inert metadata: the table name, its integer primary key
// and the ordered list of data columns. The generic repository renders its
// statements from it and the mappers address columns through it. It knows
// nothing about the entity the rows map to.

use crate::error::{AppError, AppResult};

/// Storage class of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit integer in the domain, INTEGER in the store
    Integer,
    /// 64-bit integer (identities and references)
    BigInt,
    Text,
    /// Local timestamp stored as ISO-8601 text
    Timestamp,
    /// JSON document stored as text
    Json,
}

impl ColumnType {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::BigInt => "INTEGER",
            ColumnType::Text | ColumnType::Timestamp | ColumnType::Json => "TEXT",
        }
    }
}

/// One data column (the primary key is declared on the table instead)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    /// Table whose primary key this column points at
    pub references: Option<&'static TableSchema>,
}

impl Column {
    /// A NOT NULL column
    pub const fn new(name: &'static str, column_type: ColumnType) -> Self {
        Self {
            name,
            column_type,
            nullable: false,
            unique: false,
            references: None,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub const fn references(mut self, table: &'static TableSchema) -> Self {
        self.references = Some(table);
        self
    }

    fn definition(&self) -> String {
        let mut definition = format!("{} {}", quote(self.name), self.column_type.sql_type());
        if !self.nullable {
            definition.push_str(" NOT NULL");
        }
        if self.unique {
            definition.push_str(" UNIQUE");
        }
        definition
    }
}

/// Relational shape of one entity type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    /// Auto-generated integer key, aliased to the entity identity
    pub primary_key: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub const fn new(
        name: &'static str,
        primary_key: &'static str,
        columns: &'static [Column],
    ) -> Self {
        Self {
            name,
            primary_key,
            columns,
        }
    }

    /// Data column names in declaration order (primary key excluded)
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// `CREATE TABLE IF NOT EXISTS` for this table.
    ///
    /// The key is `AUTOINCREMENT` so an identity is never handed out twice,
    /// even after the row holding it is deleted.
    pub fn create_table_sql(&self) -> String {
        let mut definitions = vec![format!(
            "{} INTEGER PRIMARY KEY AUTOINCREMENT",
            quote(self.primary_key)
        )];
        definitions.extend(self.columns.iter().map(Column::definition));
        definitions.extend(self.columns.iter().filter_map(|column| {
            column.references.map(|table| {
                format!(
                    "FOREIGN KEY ({}) REFERENCES {} ({})",
                    quote(column.name),
                    quote(table.name),
                    quote(table.primary_key)
                )
            })
        }));

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            quote(self.name),
            definitions.join(",\n    ")
        )
    }

    /// Checks that `columns` only names columns of this table, each at most once.
    ///
    /// `allow_primary_key` is true for inserts (pre-seeded identities) and
    /// false for updates, which must never rewrite the key.
    pub fn check_columns<'a, I>(&self, columns: I, allow_primary_key: bool) -> AppResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen: Vec<&str> = Vec::new();
        for name in columns {
            if name == self.primary_key {
                if !allow_primary_key {
                    return Err(AppError::mapping(format!(
                        "{}: primary key '{}' cannot be assigned here",
                        self.name, name
                    )));
                }
            } else if self.column(name).is_none() {
                return Err(AppError::mapping(format!(
                    "{}: unknown column '{}'",
                    self.name, name
                )));
            }
            if seen.contains(&name) {
                return Err(AppError::mapping(format!(
                    "{}: column '{}' assigned twice",
                    self.name, name
                )));
            }
            seen.push(name);
        }

        if seen.iter().all(|name| *name == self.primary_key) {
            return Err(AppError::mapping(format!(
                "{}: no data columns assigned",
                self.name
            )));
        }
        Ok(())
    }
}

/// Double-quotes an identifier
pub fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier)
}
