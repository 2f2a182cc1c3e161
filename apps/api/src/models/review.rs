use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::sql_text;

/// A row of the `reviews` table, as returned by `POST /api/reviews`.
/// Only `id` is assumed non-null; the table may predate this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewRow {
    pub id: i32,
    pub user_id: Option<i32>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A review joined with its author's name, as listed by `GET /api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReviewWithAuthor {
    pub id: i32,
    pub user_id: Option<i32>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
}

/// Fields are bound as text and cast by PostgreSQL. Neither the rating range
/// nor the author's existence is checked here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReviewRequest {
    #[serde(default, deserialize_with = "sql_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "sql_text")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "sql_text")]
    pub comment: Option<String>,
}
