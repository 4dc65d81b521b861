use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::AccountError;

/// `Json<T>` whose rejections come back as `{message}` with 400.
///
/// A request without a JSON content type (including an empty body) is read as
/// `T::default()`, so the account rules report the missing field themselves.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AccountError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(JsonBody(T::default())),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "rejected request body");
                Err(AccountError::BadRequest("Invalid request body.".into()))
            }
        }
    }
}
