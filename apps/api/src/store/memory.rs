use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::review::{NewReviewRequest, ReviewRow, ReviewWithAuthor};
use crate::models::subscriber::SubscriberRow;
use crate::models::user::{RegisterRequest, UserRow};
use crate::store::Store;

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    reviews: Vec<ReviewRow>,
    subscribers: Vec<SubscriberRow>,
}

/// In-memory `Store` mirroring the schema in `migrations/`: serial ids,
/// NOT NULL columns, text-to-number casts, the reviews -> users foreign key,
/// and `now()` timestamps.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the pool could not hand out a
    /// connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Inserts a row as-is, bypassing constraints, like a row written by
    /// another system into a laxer table.
    pub fn insert_raw_user(&self, row: UserRow) {
        self.tables.lock().unwrap().users.push(row);
    }

    pub fn users_with_email(&self, email: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| u.email.as_deref() == Some(email))
            .count()
    }

    pub fn subscribers_with_email(&self, email: &str) -> usize {
        self.tables
            .lock()
            .unwrap()
            .subscribers
            .iter()
            .filter(|s| s.email.as_deref() == Some(email))
            .count()
    }

    pub fn review_count(&self) -> usize {
        self.tables.lock().unwrap().reviews.len()
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

fn not_null<T>(value: Option<T>, column: &str) -> Result<T, sqlx::Error> {
    value.ok_or_else(|| {
        sqlx::Error::Protocol(format!(
            "null value in column \"{column}\" violates not-null constraint"
        ))
    })
}

/// `$n::text::<type>` cast; PostgreSQL tolerates surrounding whitespace.
fn cast<T: FromStr>(text: &str, type_name: &str) -> Result<T, sqlx::Error> {
    text.trim().parse::<T>().map_err(|_| {
        sqlx::Error::Protocol(format!(
            "invalid input syntax for type {type_name}: \"{text}\""
        ))
    })
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX - 1) + 1
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_email(&self, email: Option<&str>) -> Result<Option<UserRow>, sqlx::Error> {
        self.check_available()?;
        let Some(email) = email else {
            return Ok(None);
        };
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn insert_user(&self, req: &RegisterRequest) -> Result<UserRow, sqlx::Error> {
        self.check_available()?;
        let name = not_null(req.name.clone(), "name")?;
        let email = not_null(req.email.clone(), "email")?;
        let password = not_null(req.password.clone(), "password")?;

        let mut tables = self.tables.lock().unwrap();
        let row = UserRow {
            id: next_id(tables.users.len()),
            name: Some(name),
            email: Some(email),
            password: Some(password),
            role: Some("user".to_string()),
        };
        tables.users.push(row.clone());
        Ok(row)
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        let mut joined: Vec<ReviewWithAuthor> = tables
            .reviews
            .iter()
            .filter_map(|r| {
                let author = tables.users.iter().find(|u| Some(u.id) == r.user_id)?;
                Some(ReviewWithAuthor {
                    id: r.id,
                    user_id: r.user_id,
                    rating: r.rating,
                    comment: r.comment.clone(),
                    created_at: r.created_at,
                    name: author.name.clone(),
                })
            })
            .collect();
        joined.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(joined)
    }

    async fn insert_review(&self, req: &NewReviewRequest) -> Result<ReviewRow, sqlx::Error> {
        self.check_available()?;
        let user_id = req
            .user_id
            .as_deref()
            .map(|text| cast::<i32>(text, "integer"))
            .transpose()?;
        let rating = req
            .rating
            .as_deref()
            .map(|text| cast::<f64>(text, "double precision"))
            .transpose()?;
        let user_id = not_null(user_id, "user_id")?;
        let rating = not_null(rating, "rating")?;

        let mut tables = self.tables.lock().unwrap();
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(sqlx::Error::Protocol(
                "insert or update on table \"reviews\" violates foreign key constraint \"reviews_user_id_fkey\""
                    .to_string(),
            ));
        }
        let row = ReviewRow {
            id: next_id(tables.reviews.len()),
            user_id: Some(user_id),
            rating: Some(rating),
            comment: req.comment.clone(),
            created_at: Some(Utc::now()),
        };
        tables.reviews.push(row.clone());
        Ok(row)
    }

    async fn find_subscriber_by_email(
        &self,
        email: Option<&str>,
    ) -> Result<Option<SubscriberRow>, sqlx::Error> {
        self.check_available()?;
        let Some(email) = email else {
            return Ok(None);
        };
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .subscribers
            .iter()
            .find(|s| s.email.as_deref() == Some(email))
            .cloned())
    }

    async fn insert_subscriber(&self, email: Option<&str>) -> Result<SubscriberRow, sqlx::Error> {
        self.check_available()?;
        let email = not_null(email.map(str::to_string), "email")?;

        let mut tables = self.tables.lock().unwrap();
        let row = SubscriberRow {
            id: next_id(tables.subscribers.len()),
            email: Some(email),
        };
        tables.subscribers.push(row.clone());
        Ok(row)
    }
}
