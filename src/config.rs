//! Build-time Configuration
//!
//! Values are baked in from the environment at compile time (`trunk build`
//! passes the shell environment through to rustc).

use log::LevelFilter;
use serde::Serialize;

/// Default avatar size limit (2 MiB)
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

/// Options handed to the storage SDK's `initializeApp`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API origin; `None` means the page's own origin
    pub api_base: Option<String>,
    pub log_level: LevelFilter,
    pub max_avatar_bytes: u64,
    pub firebase: FirebaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            log_level: LevelFilter::Info,
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
            firebase: FirebaseConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let firebase = FirebaseConfig {
            api_key: env_string(option_env!("ESTATE_FIREBASE_API_KEY")),
            auth_domain: env_string(option_env!("ESTATE_FIREBASE_AUTH_DOMAIN")),
            project_id: env_string(option_env!("ESTATE_FIREBASE_PROJECT_ID")),
            storage_bucket: env_string(option_env!("ESTATE_FIREBASE_STORAGE_BUCKET")),
            messaging_sender_id: env_string(option_env!("ESTATE_FIREBASE_MESSAGING_SENDER_ID")),
            app_id: env_string(option_env!("ESTATE_FIREBASE_APP_ID")),
        };
        Self::from_parts(
            option_env!("ESTATE_API_BASE"),
            option_env!("ESTATE_LOG_LEVEL"),
            option_env!("ESTATE_MAX_AVATAR_BYTES"),
            firebase,
        )
    }

    fn from_parts(
        api_base: Option<&str>,
        log_level: Option<&str>,
        max_avatar_bytes: Option<&str>,
        firebase: FirebaseConfig,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .filter(|base| !base.is_empty()),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            max_avatar_bytes: max_avatar_bytes
                .and_then(|bytes| bytes.trim().parse().ok())
                .unwrap_or(defaults.max_avatar_bytes),
            firebase,
        }
    }
}

fn env_string(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
