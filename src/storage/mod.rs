//! Avatar Storage
//!
//! Object naming, upload lifecycle events and progress tracking. The SDK
//! bindings live in [`firebase`].

mod firebase;

pub use firebase::{init_storage, upload_avatar};

use crate::error::StorageError;

/// Object key for an upload: epoch millis followed by the original file name
pub fn object_key(epoch_millis: u64, file_name: &str) -> String {
    format!("{}{}", epoch_millis, file_name)
}

/// Reject files the profile page does not accept before touching storage
pub fn check_avatar(size: u64, mime_type: &str, limit: u64) -> Result<(), StorageError> {
    if !mime_type.starts_with("image/") {
        return Err(StorageError::NotImage(mime_type.to_string()));
    }
    if size > limit {
        return Err(StorageError::TooLarge { size, limit });
    }
    Ok(())
}

/// Lifecycle event reported by an upload task
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    Progress { bytes_transferred: f64, total_bytes: f64 },
    Failed(String),
    /// Upload finished and its durable URL was resolved
    Completed { download_url: String },
}

/// Whole-number percentage of an upload, rounded to nearest
pub fn percent_done(bytes_transferred: f64, total_bytes: f64) -> u8 {
    if total_bytes <= 0.0 {
        return 0;
    }
    (bytes_transferred / total_bytes * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Progress of the current upload attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub percent: u8,
    pub failed: bool,
}

impl UploadProgress {
    pub fn status(&self) -> UploadStatus {
        if self.failed {
            UploadStatus::Failed
        } else if self.percent == 100 {
            UploadStatus::Done
        } else if self.percent > 0 {
            UploadStatus::Uploading(self.percent)
        } else {
            UploadStatus::Idle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading(u8),
    Done,
    Failed,
}

impl UploadStatus {
    pub fn message(&self) -> String {
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading(percent) => format!("Uploading {}%", percent),
            UploadStatus::Done => "Image successfully uploaded!".to_string(),
            UploadStatus::Failed => "Error Image upload (image must be less than 2 mb)".to_string(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "upload-status",
            UploadStatus::Uploading(_) => "upload-status pending",
            UploadStatus::Done => "upload-status success",
            UploadStatus::Failed => "upload-status error",
        }
    }
}
