//! UI Components
//!
//! Leptos components of the profile page.

mod profile_page;
mod avatar_upload;
mod account_actions;
mod listing_list;
mod delete_confirm_button;

pub use profile_page::ProfilePage;
pub use avatar_upload::AvatarUpload;
pub use account_actions::AccountActions;
pub use listing_list::ListingList;
pub use delete_confirm_button::DeleteConfirmButton;
