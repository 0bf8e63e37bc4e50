//! Profile Page Component
//!
//! Account form, avatar upload, account actions and the user's listings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AccountActions, AvatarUpload, ListingList};
use crate::context::use_app_context;
use crate::models::DraftField;
use crate::profile::ProfileState;
use crate::store::{
    dispatch, store_current_user_untracked, store_error, store_loading, store_user_id, use_user_store,
    SessionAction,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_user_store();
    let ctx = use_app_context();

    // Draft starts from the session record and is dropped with the page
    let Some(user) = store_current_user_untracked(&store) else {
        return ().into_any();
    };
    let state = RwSignal::new(ProfileState::new(&user));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = store_user_id(&store) else { return };
        let draft = state.with_untracked(|s| s.draft.clone());
        let api = ctx.api();

        dispatch(&store, SessionAction::UpdateStarted);
        state.update(|s| s.update_requested());
        spawn_local(async move {
            match commands::update_user(&api, &user_id, &draft).await {
                Ok(updated) => {
                    log::info!("profile {} updated", user_id);
                    dispatch(&store, SessionAction::UpdateSucceeded(updated));
                    state.update(|s| s.update_finished(true));
                }
                Err(e) => {
                    log::warn!("profile update failed: {}", e);
                    dispatch(&store, SessionAction::Failed(e.to_string()));
                    state.update(|s| s.update_finished(false));
                }
            }
        });
    };

    view! {
        <div class="profile-page">
            <h1 class="profile-title">"Profile"</h1>
            <form class="profile-form" on:submit=on_submit>
                <AvatarUpload state=state />

                {DraftField::ALL.into_iter().map(|field| {
                    let (kind, placeholder) = field.input_attrs();
                    view! {
                        <input
                            class="profile-input"
                            type=kind
                            placeholder=placeholder
                            id=placeholder
                            prop:value=move || state.with(|s| s.draft.get(field).to_string())
                            on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
                        />
                    }
                }).collect_view()}

                <button type="submit" class="update-btn" disabled=move || store_loading(&store)>
                    {move || if store_loading(&store) { "Loading..." } else { "Update" }}
                </button>
                <a class="create-listing-btn" href="/create-listing">"Create Listing"</a>
            </form>

            <AccountActions />

            <p class="error-text">{move || store_error(&store)}</p>
            <p class="success-text">
                {move || if state.with(|s| s.update_success) { "User is updated successfully!" } else { "" }}
            </p>

            <ListingList state=state />
        </div>
    }
    .into_any()
}
