use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::review::{NewReviewRequest, ReviewRow, ReviewWithAuthor};
use crate::models::subscriber::SubscriberRow;
use crate::models::user::{RegisterRequest, UserRow};
use crate::store::Store;

/// `Store` backed by the process-wide PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_email(&self, email: Option<&str>) -> Result<Option<UserRow>, sqlx::Error> {
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert_user(&self, req: &RegisterRequest) -> Result<UserRow, sqlx::Error> {
        sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name, email, password, role) VALUES ($1, $2, $3, 'user') RETURNING *",
        )
        .bind(req.name.as_deref())
        .bind(req.email.as_deref())
        .bind(req.password.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    async fn list_reviews(&self) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            SELECT reviews.id, reviews.user_id, reviews.rating, reviews.comment,
                   reviews.created_at, users.name
            FROM reviews
            JOIN users ON reviews.user_id = users.id
            ORDER BY reviews.created_at DESC, reviews.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn insert_review(&self, req: &NewReviewRequest) -> Result<ReviewRow, sqlx::Error> {
        // Values arrive as text; PostgreSQL performs the numeric casts.
        sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (user_id, rating, comment)
            VALUES ($1::text::integer, $2::text::double precision, $3)
            RETURNING *
            "#,
        )
        .bind(req.user_id.as_deref())
        .bind(req.rating.as_deref())
        .bind(req.comment.as_deref())
        .fetch_one(&self.pool)
        .await
    }

    async fn find_subscriber_by_email(
        &self,
        email: Option<&str>,
    ) -> Result<Option<SubscriberRow>, sqlx::Error> {
        sqlx::query_as::<_, SubscriberRow>("SELECT * FROM subscribers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert_subscriber(&self, email: Option<&str>) -> Result<SubscriberRow, sqlx::Error> {
        sqlx::query_as::<_, SubscriberRow>("INSERT INTO subscribers (email) VALUES ($1) RETURNING *")
            .bind(email)
            .fetch_one(&self.pool)
            .await
    }
}
