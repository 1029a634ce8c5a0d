use crate::db::record::Record;
use crate::db::schema::SQLITE_INIT;
use crate::error::PayrollError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// CRUD over every `Record` kind. Each operation is a single statement, so it
/// is atomic with respect to the id it touches.
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if missing.
    pub async fn connect(database_url: &str) -> Result<Self, PayrollError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let mut pool_opts = SqlitePoolOptions::new();
        if is_in_memory(database_url) {
            // Every new connection to `:memory:` opens an empty database; keep exactly one alive.
            pool_opts = pool_opts
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_opts.connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), PayrollError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new row; any id carried by `record` is ignored.
    pub async fn create<R: Record>(&self, record: R) -> Result<R, PayrollError> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders(R::COLUMNS.len())
        );
        let result = record.bind_columns(sqlx::query(&sql)).execute(&self.pool).await?;
        let id = result.last_insert_rowid();
        debug!(kind = R::KIND, id, "row inserted");
        Ok(record.with_id(id))
    }

    pub async fn get<R: Record>(&self, id: i64) -> Result<R, PayrollError> {
        let sql = format!(
            "SELECT id, {} FROM {} WHERE id = ?",
            R::COLUMNS.join(", "),
            R::TABLE
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PayrollError::NotFound { kind: R::KIND, id })?;
        Ok(R::from_row(&row)?)
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>, PayrollError> {
        let sql = format!(
            "SELECT id, {} FROM {} ORDER BY id",
            R::COLUMNS.join(", "),
            R::TABLE
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let records = rows
            .iter()
            .map(R::from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Replace every column of row `id`, inserting it under that id when absent.
    /// Uses SQLite `INSERT ... ON CONFLICT(id) DO UPDATE`.
    /// `i64::MAX` is refused: storing it would exhaust the id sequence and fail every later create.
    pub async fn update<R: Record>(&self, id: i64, record: R) -> Result<R, PayrollError> {
        if id == i64::MAX {
            return Err(PayrollError::MalformedBody(format!(
                "{} id {id} is out of range",
                R::KIND
            )));
        }
        let assignments = R::COLUMNS
            .iter()
            .map(|c| format!("{c} = excluded.{c}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES (?, {}) ON CONFLICT(id) DO UPDATE SET {}",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders(R::COLUMNS.len()),
            assignments
        );
        record
            .bind_columns(sqlx::query(&sql).bind(id))
            .execute(&self.pool)
            .await?;
        debug!(kind = R::KIND, id, "row upserted");
        Ok(record.with_id(id))
    }

    /// Returns whether a row was removed. Deleting a missing id is not an error.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<bool, PayrollError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count<R: Record>(&self) -> Result<i64, PayrollError> {
        let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let rec: (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(rec.0)
    }
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
