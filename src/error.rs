//! Error Types
//!
//! Failures surfaced by the REST bindings and the avatar upload path.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a REST call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Reply body carried `success: false`; `message` is shown as-is
    #[error("{message}")]
    Rejected { message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot determine the page origin for API requests")]
    NoOrigin,
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected { message: message.into() }
    }
}

/// Failure of an avatar upload attempt
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("image is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("file type '{0}' is not an image")]
    NotImage(String),

    #[error("storage: {0}")]
    Sdk(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Sdk(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_message_verbatim() {
        let err = ApiError::rejected("User not found!");
        assert_eq!(err.to_string(), "User not found!");
    }

    #[test]
    fn too_large_mentions_both_sizes() {
        let err = StorageError::TooLarge { size: 3_000_000, limit: 2_097_152 };
        assert_eq!(err.to_string(), "image is 3000000 bytes, limit is 2097152 bytes");
    }
}
