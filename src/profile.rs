//! Profile Page State
//!
//! View-local state of the profile page and its transitions. Kept free of
//! DOM and network calls so the page logic runs under plain `cargo test`.

use crate::error::ApiError;
use crate::models::{DraftField, ListingSummary, ProfileDraft, User};
use crate::storage::{percent_done, UploadEvent, UploadProgress};

pub const LISTINGS_ERROR: &str = "Some error occurred";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub draft: ProfileDraft,
    pub upload: UploadProgress,
    /// Id of the current upload attempt; events from older attempts are dropped
    pub upload_attempt: u32,
    /// Last update request succeeded
    pub update_success: bool,
    pub listings: Vec<ListingSummary>,
    pub listings_error: bool,
    /// `Show Listings` button is visible (hidden while a fetch is in flight)
    pub show_listings_button: bool,
    pub listing_delete_error: Option<String>,
}

impl ProfileState {
    pub fn new(user: &User) -> Self {
        Self {
            draft: ProfileDraft::from_user(user),
            show_listings_button: true,
            ..Default::default()
        }
    }

    pub fn edit(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Avatar to display: the draft's, else the stored user's
    pub fn avatar_src(&self, stored: &str) -> String {
        if self.draft.avatar.is_empty() {
            stored.to_string()
        } else {
            self.draft.avatar.clone()
        }
    }

    pub fn update_requested(&mut self) {
        self.update_success = false;
    }

    pub fn update_finished(&mut self, succeeded: bool) {
        self.update_success = succeeded;
    }

    /// A new file was chosen; returns the attempt id its events must carry
    pub fn upload_started(&mut self) -> u32 {
        self.upload_attempt = self.upload_attempt.wrapping_add(1);
        self.upload = UploadProgress::default();
        self.upload_attempt
    }

    /// File was refused before reaching storage
    pub fn upload_rejected(&mut self) {
        self.upload_attempt = self.upload_attempt.wrapping_add(1);
        self.upload = UploadProgress { percent: 0, failed: true };
    }

    pub fn apply_upload(&mut self, attempt: u32, event: UploadEvent) {
        if attempt != self.upload_attempt {
            return;
        }
        match event {
            UploadEvent::Progress { bytes_transferred, total_bytes } => {
                self.upload.percent = percent_done(bytes_transferred, total_bytes);
            }
            UploadEvent::Failed(_) => self.upload.failed = true,
            UploadEvent::Completed { download_url } => self.draft.avatar = download_url,
        }
    }

    pub fn listings_requested(&mut self) {
        self.show_listings_button = false;
        self.listings_error = false;
        self.listing_delete_error = None;
    }

    pub fn listings_loaded(&mut self, result: Result<Vec<ListingSummary>, ApiError>) {
        match result {
            Ok(listings) => {
                self.listings = listings;
            }
            Err(_) => {
                self.listings_error = true;
                self.show_listings_button = true;
            }
        }
    }

    pub fn listing_deleted(&mut self, listing_id: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.listings.retain(|listing| listing.id != listing_id);
                self.listing_delete_error = None;
            }
            Err(err) => {
                let name = self
                    .listings
                    .iter()
                    .find(|listing| listing.id == listing_id)
                    .map(|listing| listing.name.as_str())
                    .unwrap_or(listing_id);
                let reason = err.to_string();
                self.listing_delete_error = Some(if reason.is_empty() {
                    format!("Could not delete '{}'", name)
                } else {
                    format!("Could not delete '{}': {}", name, reason)
                });
            }
        }
    }

    pub fn listings_error_text(&self) -> &'static str {
        if self.listings_error { LISTINGS_ERROR } else { "" }
    }
}
