//! Session Persistence
//!
//! Keeps the signed-in user record in `localStorage` across page loads.

use crate::models::User;

const SESSION_KEY: &str = "estate.currentUser";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the stored user, if any. A corrupt entry is treated as signed out.
pub fn load_user() -> Option<User> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            None
        }
    }
}

pub fn save_user(user: &User) {
    let Some(storage) = local_storage() else { return };
    match serde_json::to_string(user) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                log::warn!("could not persist session");
            }
        }
        Err(e) => log::warn!("could not serialize session: {}", e),
    }
}

pub fn clear_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
