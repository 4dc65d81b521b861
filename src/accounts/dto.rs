use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::accounts::repo_types::User;

/// Request body for registration. Fields are optional so that a missing one
/// becomes a 400 with our message instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    pub email: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub user_name: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            user_name: u.user_name,
        }
    }
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalUsersResponse {
    pub total_users: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineUsersResponse {
    pub online_users: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_uses_camel_case_and_hides_hash() {
        let user = User {
            id: Uuid::new_v4(),
            user_name: "alice".into(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$...".into(),
            is_online: false,
            created_at: time::OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn register_request_accepts_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email.as_deref(), Some("a@x.com"));
        assert!(req.user_name.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn count_responses_serialize_with_wire_names() {
        let total = serde_json::to_string(&TotalUsersResponse { total_users: 3 }).unwrap();
        let online = serde_json::to_string(&OnlineUsersResponse { online_users: 1 }).unwrap();
        assert_eq!(total, r#"{"totalUsers":3}"#);
        assert_eq!(online, r#"{"onlineUsers":1}"#);
    }
}
