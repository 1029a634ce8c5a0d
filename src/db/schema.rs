//! SQL DDL for initializing record storage.

/// SQLite schema, one table per record kind:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never handed out twice
///   even after a delete or an explicit-id insert
/// - every domain column is nullable
/// - `customer_order.status` holds the `Status` wire name as TEXT
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NULL,
    last_name TEXT NULL,
    role TEXT NULL
);

CREATE TABLE IF NOT EXISTS customer_order (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NULL,
    status TEXT NULL
);

CREATE TABLE IF NOT EXISTS person (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NULL,
    message TEXT NULL
);
"#;
