use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    accounts::{
        dto::PublicUser,
        password::{hash_password, verify_password},
        repo::UserStore,
        repo_types::NewUser,
    },
    error::{conflict_message, AccountError},
};

/// Account rules over an injected `UserStore`.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
}

/// Treats `None` and whitespace-only strings the same way: absent.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.trim().is_empty())
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        user_name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<PublicUser, AccountError> {
        let (Some(user_name), Some(email), Some(password)) =
            (present(user_name), present(email), present(password))
        else {
            return Err(AccountError::BadRequest(
                "userName, email and password are required.".into(),
            ));
        };

        if self.store.find_by_email(email).await?.is_some() {
            warn!(%email, "email already registered");
            return Err(AccountError::Conflict(conflict_message("email")));
        }
        if self.store.find_by_user_name(user_name).await?.is_some() {
            warn!(%user_name, "user name already taken");
            return Err(AccountError::Conflict(conflict_message("user_name")));
        }

        let password_hash = hash_password(password).map_err(AccountError::Internal)?;

        // A racing insert can still trip the unique constraints; the store maps that to Duplicate.
        let user = self
            .store
            .create(NewUser {
                user_name,
                email,
                password_hash: &password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user.into())
    }

    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<PublicUser, AccountError> {
        let (Some(email), Some(password)) = (present(email), password) else {
            return Err(AccountError::BadRequest(
                "email and password are required.".into(),
            ));
        };

        let Some(user) = self.store.find_by_email(email).await? else {
            warn!(%email, "login unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash).map_err(AccountError::Internal)? {
            warn!(%email, user_id = %user.id, "login invalid password");
            return Err(AccountError::InvalidCredentials);
        }

        if !self.store.set_online(email, true).await? {
            // Row vanished between lookup and update.
            return Err(AccountError::InvalidCredentials);
        }

        info!(user_id = %user.id, "user logged in");
        Ok(user.into())
    }

    #[instrument(skip(self))]
    pub async fn logout(&self, email: Option<&str>) -> Result<(), AccountError> {
        let Some(email) = present(email) else {
            return Err(AccountError::BadRequest("Email is required.".into()));
        };

        if !self.store.set_online(email, false).await? {
            warn!(%email, "logout unknown email");
            return Err(AccountError::NotFound("User not found.".into()));
        }

        info!(%email, "user logged out");
        Ok(())
    }

    pub async fn count_total(&self) -> Result<i64, AccountError> {
        Ok(self.store.count_all().await?)
    }

    pub async fn count_online(&self) -> Result<i64, AccountError> {
        Ok(self.store.count_online().await?)
    }
}
