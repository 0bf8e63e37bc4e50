//! User Commands
//!
//! Account update and deletion.

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ProfileDraft, User};
use super::reply::send;
use super::ApiClient;

pub async fn update_user(api: &ApiClient, user_id: &str, draft: &ProfileDraft) -> Result<User, ApiError> {
    log::debug!("updating user {}", user_id);
    let request = api.http().post(api.url("/api/user/update", Some(user_id))).json(draft);
    send(request).await
}

pub async fn delete_user(api: &ApiClient, user_id: &str) -> Result<(), ApiError> {
    log::debug!("deleting user {}", user_id);
    let request = api.http().delete(api.url("/api/user/delete", Some(user_id)));
    send::<Value>(request).await.map(|_| ())
}
