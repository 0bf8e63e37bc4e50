//! Listing Commands
//!
//! Listings owned by the signed-in user.

use serde_json::Value;

use crate::error::ApiError;
use crate::models::ListingSummary;
use super::reply::send;
use super::ApiClient;

pub async fn list_user_listings(api: &ApiClient, user_id: &str) -> Result<Vec<ListingSummary>, ApiError> {
    let request = api.http().get(api.url("/api/user/listings", Some(user_id)));
    send(request).await
}

pub async fn delete_listing(api: &ApiClient, listing_id: &str) -> Result<(), ApiError> {
    log::debug!("deleting listing {}", listing_id);
    let request = api.http().delete(api.url("/api/listing/delete", Some(listing_id)));
    send::<Value>(request).await.map(|_| ())
}
