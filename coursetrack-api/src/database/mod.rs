pub mod categories;
pub mod certificates;
pub mod courses;
pub mod migrations;
pub mod notes;
pub mod projects;
pub mod skills;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Type;
use rusqlite::{Connection, Row, ToSql};
use shared_types::ParseEnumError;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Duplicate(&'static str),
    #[error("Database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for DbError {
    fn from(e: rusqlite::Error) -> Self {
        DbError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for DbError {
    fn from(e: serde_json::Error) -> Self {
        DbError::Database(e.to_string())
    }
}

#[derive(Clone)]
pub struct AsyncDbConnection {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl AsyncDbConnection {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub async fn lock(&self) -> Result<PooledConnection<SqliteConnectionManager>, DbError> {
        self.pool
            .get()
            .map_err(|e| DbError::Database(format!("Failed to get DB connection from pool: {e}")))
    }
}

pub struct Database {
    pub async_connection: AsyncDbConnection,
}

impl Database {
    /// Open (or create) the database file and run migrations
    pub fn new(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Migrate on a dedicated connection so pooled ones see the final schema
        {
            let conn = Connection::open(db_path)?;
            migrations::run_migrations(&conn)?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            Ok(())
        });

        let pool = Pool::builder().max_size(8).build(manager)?;

        Ok(Database {
            async_connection: AsyncDbConnection::new(pool),
        })
    }
}

pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reads a text column holding one of the shared enums
pub(crate) fn enum_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = ParseEnumError>,
{
    let text: String = row.get(idx)?;
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a text column holding a JSON string array
pub(crate) fn string_list_column(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Builds `UPDATE ... SET` statements from the fields present in a partial
/// update request. `updated_at` is always written.
pub(crate) struct PartialUpdate {
    table: &'static str,
    columns: Vec<String>,
    params: Vec<Box<dyn ToSql>>,
}

impl PartialUpdate {
    pub(crate) fn new(table: &'static str, now: i64) -> Self {
        Self {
            table,
            columns: vec!["updated_at = ?".to_string()],
            params: vec![Box::new(now)],
        }
    }

    pub(crate) fn set<T: ToSql + 'static>(&mut self, column: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.columns.push(format!("{column} = ?"));
            self.params.push(Box::new(value));
        }
        self
    }

    /// Same as [`set`](Self::set) for nullable columns: `Some(None)` writes NULL
    pub(crate) fn set_nullable<T: ToSql + 'static>(
        &mut self,
        column: &str,
        value: Option<Option<T>>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.columns.push(format!("{column} = ?"));
            self.params.push(Box::new(value));
        }
        self
    }

    /// Runs the update against the rows matching `filter` and returns the
    /// number of rows touched.
    pub(crate) fn execute(
        mut self,
        conn: &Connection,
        filter: &str,
        keys: &[i64],
    ) -> Result<usize, rusqlite::Error> {
        for key in keys {
            self.params.push(Box::new(*key));
        }

        let query = format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            self.columns.join(", "),
            filter
        );

        let params_refs: Vec<&dyn ToSql> = self.params.iter().map(|p| p.as_ref()).collect();

        conn.execute(&query, params_refs.as_slice())
    }
}
