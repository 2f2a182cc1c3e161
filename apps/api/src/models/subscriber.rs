use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::sql_text;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriberRow {
    pub id: i32,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default, deserialize_with = "sql_text")]
    pub email: Option<String>,
}
