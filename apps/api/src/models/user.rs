use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::models::sql_text;

/// A row of the `users` table.
///
/// Only `id` is assumed non-null; the table may predate this service.
/// `password` is stored and compared as plain text. This is a known
/// insecurity carried over unchanged; the row is echoed back verbatim by
/// `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl UserRow {
    /// Strict equality against the stored password: a JSON string equal to
    /// it, nothing else. A missing or null stored password never matches.
    pub fn password_matches(&self, supplied: Option<&Value>) -> bool {
        match (supplied.and_then(Value::as_str), self.password.as_deref()) {
            (Some(supplied), Some(stored)) => supplied == stored,
            _ => false,
        }
    }
}

/// The user as returned by a successful login. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<UserRow> for PublicUser {
    fn from(row: UserRow) -> Self {
        PublicUser {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
        }
    }
}

/// Absent fields are passed to the store as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "sql_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "sql_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "sql_text")]
    pub password: Option<String>,
}

/// `password` keeps its JSON type so that `123` never equals a stored `"123"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "sql_text")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Value>,
}
