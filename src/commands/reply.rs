//! Reply Decoding
//!
//! The backend answers failures with `{ "success": false, "message": ... }`
//! and successes with the payload itself.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();
        return Err(ApiError::rejected(message));
    }
    Ok(serde_json::from_value(body)?)
}

/// Send a request and decode its JSON body
pub(crate) async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let body: Value = request.send().await?.json().await?;
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingSummary, User};
    use serde_json::json;

    #[test]
    fn failure_carries_server_message() {
        let err = decode::<Value>(json!({ "success": false, "statusCode": 401, "message": "X" })).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn failure_without_message_is_empty() {
        let err = decode::<Vec<ListingSummary>>(json!({ "success": false })).unwrap_err();
        assert_eq!(err.to_string(), "");
    }

    #[test]
    fn success_flag_true_is_not_a_failure() {
        let body = decode::<Value>(json!({ "success": true, "message": "done" })).unwrap();
        assert_eq!(body["message"], "done");
    }

    #[test]
    fn plain_string_reply_is_success() {
        let body = decode::<Value>(json!("User has been deleted!")).unwrap();
        assert_eq!(body, json!("User has been deleted!"));
    }

    #[test]
    fn user_record_decodes() {
        let user: User = decode(json!({
            "_id": "u1", "userName": "bob", "email": "bob@example.com", "avatar": "a.png"
        }))
        .unwrap();
        assert_eq!(user.user_name, "bob");
    }

    #[test]
    fn listing_array_decodes() {
        let listings: Vec<ListingSummary> = decode(json!([
            { "_id": "L1", "name": "Cabin", "imageUrls": ["c.jpg"] },
            { "_id": "L2", "name": "Flat", "imageUrls": [] }
        ]))
        .unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "L1");
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let err = decode::<User>(json!({ "unexpected": true })).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
