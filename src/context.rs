//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::ApiClient;
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend API handle
    api: StoredValue<ApiClient, LocalStorage>,
    /// Largest avatar accepted for upload, in bytes
    pub max_avatar_bytes: u64,
}

impl AppContext {
    pub fn new(api: ApiClient, config: &AppConfig) -> Self {
        Self {
            api: StoredValue::new_local(api),
            max_avatar_bytes: config.max_avatar_bytes,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
