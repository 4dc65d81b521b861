use async_trait::async_trait;
use sqlx::PgPool;

use crate::accounts::repo_types::{NewUser, StoreError, User};

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>>;
    async fn create(&self, new: NewUser<'_>) -> StoreResult<User>;
    /// Returns `false` when no user has this email.
    async fn set_online(&self, email: &str, online: bool) -> StoreResult<bool>;
    async fn count_all(&self) -> StoreResult<i64>;
    async fn count_online(&self) -> StoreResult<i64>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, email, password_hash, is_online, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, user_name, email, password_hash, is_online, created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn create(&self, new: NewUser<'_>) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, email, password_hash, is_online, created_at
            "#,
        )
        .bind(new.user_name)
        .bind(new.email)
        .bind(new.password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn set_online(&self, email: &str, online: bool) -> StoreResult<bool> {
        let res = sqlx::query(r#"UPDATE users SET is_online = $2 WHERE email = $1"#)
            .bind(email)
            .bind(online)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn count_all(&self) -> StoreResult<i64> {
        let n = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users"#)
            .fetch_one(&self.db)
            .await?;
        Ok(n)
    }

    async fn count_online(&self) -> StoreResult<i64> {
        let n = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM users WHERE is_online"#)
            .fetch_one(&self.db)
            .await?;
        Ok(n)
    }
}
