use serde::{Serialize, de::DeserializeOwned};
use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A kind of record served under its own collection path and stored in its own table.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular name, used in not-found messages and the embedded list key.
    const KIND: &'static str;
    /// Path segment of the collection, also the link relation pointing at it.
    const COLLECTION: &'static str;
    const TABLE: &'static str;
    /// Every column except `id`, in the order `bind_columns` binds them.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn with_id(self, id: i64) -> Self;

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;

    /// HAL `_embedded` key for a list of this kind, e.g. `employeeList`.
    fn embedded_rel() -> String {
        format!("{}List", Self::KIND)
    }
}
