use crate::db::record::{Record, SqliteQuery};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use std::str::FromStr;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmployeeBody", into = "EmployeeView")]
pub struct Employee {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

impl Employee {
    pub fn new(first_name: &str, last_name: &str, role: &str) -> Self {
        Self {
            id: 0,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            role: Some(role.to_string()),
        }
    }

    /// First and last name joined by a space, skipping absent parts.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

/// Inbound employee JSON. `name` is split at the first space when the
/// explicit name parts are missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EmployeeBody {
    id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
    name: Option<String>,
}

impl From<EmployeeBody> for Employee {
    fn from(b: EmployeeBody) -> Self {
        let (split_first, split_last) = match b.name {
            Some(name) => match name.split_once(' ') {
                Some((first, last)) => (Some(first.to_string()), Some(last.to_string())),
                None => (Some(name), None),
            },
            None => (None, None),
        };
        Self {
            id: b.id.unwrap_or_default(),
            first_name: b.first_name.or(split_first),
            last_name: b.last_name.or(split_last),
            role: b.role,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeView {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
    name: Option<String>,
}

impl From<Employee> for EmployeeView {
    fn from(e: Employee) -> Self {
        let name = e.full_name();
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            role: e.role,
            name,
        }
    }
}

impl Record for Employee {
    const KIND: &'static str = "employee";
    const COLLECTION: &'static str = "employees";
    const TABLE: &'static str = "employee";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "role"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.first_name.clone())
            .bind(self.last_name.clone())
            .bind(self.role.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            role: row.try_get("role")?,
        })
    }
}

/// The various states an order can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
            Status::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, ThisError)]
#[error("unknown order status `{0}`")]
pub struct ParseStatusError(String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(Status::InProgress),
            "COMPLETED" => Ok(Status::Completed),
            "CANCELLED" => Ok(Status::Cancelled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: i64,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl Order {
    pub fn new(description: &str, status: Status) -> Self {
        Self {
            id: 0,
            description: Some(description.to_string()),
            status: Some(status),
        }
    }
}

impl Record for Order {
    const KIND: &'static str = "order";
    const COLLECTION: &'static str = "orders";
    // `order` is a reserved word in SQL.
    const TABLE: &'static str = "customer_order";
    const COLUMNS: &'static [&'static str] = &["description", "status"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.description.clone())
            .bind(self.status.map(Status::as_str))
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let status: Option<String> = row.try_get("status")?;
        let status = status
            .map(|s| s.parse::<Status>())
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Self {
            id: row.try_get("id")?,
            description: row.try_get("description")?,
            status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: i64,
    pub name: Option<String>,
    pub message: Option<String>,
}

impl Person {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            id: 0,
            name: Some(name.to_string()),
            message: Some(message.to_string()),
        }
    }
}

impl Record for Person {
    const KIND: &'static str = "person";
    const COLLECTION: &'static str = "persons";
    const TABLE: &'static str = "person";
    const COLUMNS: &'static [&'static str] = &["name", "message"];

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn bind_columns<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.clone()).bind(self.message.clone())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            message: row.try_get("message")?,
        })
    }
}
