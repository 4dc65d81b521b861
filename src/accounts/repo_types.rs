use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,                   // assigned by the store
    pub user_name: String,          // unique
    pub email: String,              // unique, login key
    pub password_hash: String,      // Argon2 PHC string
    pub is_online: bool,
    pub created_at: OffsetDateTime,
}

/// Fields supplied on insert; everything else is defaulted by the store.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub user_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique column already holds this value. Carries the column name.
    #[error("duplicate value for {0}")]
    Duplicate(&'static str),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                let field = match db.constraint() {
                    Some("users_user_name_key") => "user_name",
                    _ => "email",
                };
                return StoreError::Duplicate(field);
            }
        }
        StoreError::Backend(e.into())
    }
}
