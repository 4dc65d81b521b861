//! In-process `UserStore` used by the unit and router tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::{
    repo::{StoreResult, UserStore},
    repo_types::{NewUser, StoreError, User},
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    fail: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call errors as if the database were unreachable.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().expect("store lock").clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(anyhow::anyhow!("connection refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.check()?;
        let users = self.users.lock().expect("store lock");
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_user_name(&self, user_name: &str) -> StoreResult<Option<User>> {
        self.check()?;
        let users = self.users.lock().expect("store lock");
        Ok(users.iter().find(|u| u.user_name == user_name).cloned())
    }

    async fn create(&self, new: NewUser<'_>) -> StoreResult<User> {
        self.check()?;
        let mut users = self.users.lock().expect("store lock");
        if users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Duplicate("email"));
        }
        if users.iter().any(|u| u.user_name == new.user_name) {
            return Err(StoreError::Duplicate("user_name"));
        }
        let user = User {
            id: Uuid::new_v4(),
            user_name: new.user_name.to_string(),
            email: new.email.to_string(),
            password_hash: new.password_hash.to_string(),
            is_online: false,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn set_online(&self, email: &str, online: bool) -> StoreResult<bool> {
        self.check()?;
        let mut users = self.users.lock().expect("store lock");
        match users.iter_mut().find(|u| u.email == email) {
            Some(u) => {
                u.is_online = online;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_all(&self) -> StoreResult<i64> {
        self.check()?;
        Ok(self.users.lock().expect("store lock").len() as i64)
    }

    async fn count_online(&self) -> StoreResult<i64> {
        self.check()?;
        let users = self.users.lock().expect("store lock");
        Ok(users.iter().filter(|u| u.is_online).count() as i64)
    }
}
