//! Auth Commands

use serde_json::Value;

use crate::error::ApiError;
use super::reply::send;
use super::ApiClient;

pub async fn sign_out(api: &ApiClient) -> Result<(), ApiError> {
    let request = api.http().get(api.url("/api/auth/signout", None));
    send::<Value>(request).await.map(|_| ())
}
