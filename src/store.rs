//! Global Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::User;

/// Signed-in user plus the status of the last account request
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UserState {
    pub current_user: Option<User>,
    /// An account request is in flight
    pub loading: bool,
    /// Message of the last failed account request
    pub error: Option<String>,
}

/// Session transitions
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    UpdateStarted,
    UpdateSucceeded(User),
    DeleteStarted,
    SignOutStarted,
    /// Account deleted or signed out
    Cleared,
    Failed(String),
}

impl UserState {
    pub fn new(current_user: Option<User>) -> Self {
        Self { current_user, ..Default::default() }
    }

    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::UpdateStarted
            | SessionAction::DeleteStarted
            | SessionAction::SignOutStarted => {
                self.loading = true;
            }
            SessionAction::UpdateSucceeded(user) => {
                self.current_user = Some(user);
                self.loading = false;
                self.error = None;
            }
            SessionAction::Cleared => {
                self.current_user = None;
                self.loading = false;
                self.error = None;
            }
            SessionAction::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }
}

/// Type alias for the store
pub type UserStore = Store<UserState>;

/// Get the session store from context
pub fn use_user_store() -> UserStore {
    expect_context::<UserStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an action to the store
pub fn dispatch(store: &UserStore, action: SessionAction) {
    log::debug!("session action {:?}", action);
    let mut state = UserState {
        current_user: store.current_user().get_untracked(),
        loading: store.loading().get_untracked(),
        error: store.error().get_untracked(),
    };
    state.reduce(action);
    store.current_user().set(state.current_user);
    store.loading().set(state.loading);
    store.error().set(state.error);
}

pub fn store_current_user(store: &UserStore) -> Option<User> {
    store.current_user().get()
}

/// Current user without subscribing (for initial values and event handlers)
pub fn store_current_user_untracked(store: &UserStore) -> Option<User> {
    store.current_user().get_untracked()
}

pub fn store_user_id(store: &UserStore) -> Option<String> {
    store.current_user().with_untracked(|user| user.as_ref().map(|user| user.id.clone()))
}

pub fn store_avatar(store: &UserStore) -> String {
    store.current_user().with(|user| user.as_ref().map(|user| user.avatar.clone()).unwrap_or_default())
}

pub fn store_is_signed_in(store: &UserStore) -> bool {
    store.current_user().with(Option::is_some)
}

pub fn store_loading(store: &UserStore) -> bool {
    store.loading().get()
}

pub fn store_error(store: &UserStore) -> String {
    store.error().get().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: "u1".to_string(),
            user_name: name.to_string(),
            email: "u1@example.com".to_string(),
            avatar: String::new(),
            password: String::new(),
        }
    }

    #[test]
    fn update_success_replaces_user_and_clears_error() {
        let mut state = UserState::new(Some(user("old")));
        state.reduce(SessionAction::Failed("earlier".to_string()));
        state.reduce(SessionAction::UpdateStarted);
        assert!(state.loading);

        state.reduce(SessionAction::UpdateSucceeded(user("new")));
        assert_eq!(state.current_user.as_ref().map(|u| u.user_name.as_str()), Some("new"));
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failure_keeps_message_verbatim() {
        for start in [SessionAction::UpdateStarted, SessionAction::DeleteStarted, SessionAction::SignOutStarted] {
            let mut state = UserState::new(Some(user("a")));
            state.reduce(start);
            state.reduce(SessionAction::Failed("X".to_string()));
            assert_eq!(state.error.as_deref(), Some("X"));
            assert!(!state.loading);
            assert!(state.current_user.is_some());
        }
    }

    #[test]
    fn cleared_drops_session() {
        let mut state = UserState::new(Some(user("a")));
        state.reduce(SessionAction::SignOutStarted);
        state.reduce(SessionAction::Cleared);
        assert_eq!(state, UserState::default());
    }
}
