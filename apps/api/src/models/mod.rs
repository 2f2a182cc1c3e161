pub mod review;
pub mod subscriber;
pub mod user;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes any JSON value into the text PostgreSQL receives for it.
///
/// Request fields are not type-checked: `"5"`, `5` and `4.5` all reach the
/// store, which casts them to the column type or fails the query. `null` and
/// absent fields bind as NULL. Use with `#[serde(default)]`.
pub fn sql_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_to_sql_text))
}

fn value_to_sql_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
