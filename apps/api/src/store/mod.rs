//! Persistence seam between the HTTP handlers and PostgreSQL.
//!
//! Default: `PgStore` (sqlx over the shared `PgPool`).
//! Tests: `MemoryStore`, which mimics the Postgres behaviour the handlers
//! depend on without a database.
//!
//! `AppState` holds an `Arc<dyn Store>` built once at startup.
//!
//! Duplicate-email detection is a separate existence check followed by an
//! insert, with no transaction and no unique constraint behind it. Two
//! concurrent requests for the same email can both pass the check and both
//! insert.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::review::{NewReviewRequest, ReviewRow, ReviewWithAuthor};
use crate::models::subscriber::SubscriberRow;
use crate::models::user::{RegisterRequest, UserRow};

pub use postgres::PgStore;

#[async_trait]
pub trait Store: Send + Sync {
    /// First user with this email. `None` as the email matches nothing,
    /// like `email = NULL` in SQL.
    async fn find_user_by_email(&self, email: Option<&str>) -> Result<Option<UserRow>, sqlx::Error>;

    /// Inserts a user with role `user` and returns the created row.
    async fn insert_user(&self, req: &RegisterRequest) -> Result<UserRow, sqlx::Error>;

    /// All reviews with their author's name, newest first.
    async fn list_reviews(&self) -> Result<Vec<ReviewWithAuthor>, sqlx::Error>;

    async fn insert_review(&self, req: &NewReviewRequest) -> Result<ReviewRow, sqlx::Error>;

    async fn find_subscriber_by_email(
        &self,
        email: Option<&str>,
    ) -> Result<Option<SubscriberRow>, sqlx::Error>;

    async fn insert_subscriber(&self, email: Option<&str>) -> Result<SubscriberRow, sqlx::Error>;
}
