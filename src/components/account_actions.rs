//! Account Actions Component
//!
//! Delete-account and sign-out controls under the profile form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{dispatch, store_user_id, use_user_store, SessionAction};

#[component]
pub fn AccountActions() -> impl IntoView {
    let store = use_user_store();
    let ctx = use_app_context();

    let delete_account = Callback::new(move |_: ()| {
        let Some(user_id) = store_user_id(&store) else { return };
        let api = ctx.api();
        dispatch(&store, SessionAction::DeleteStarted);
        spawn_local(async move {
            match commands::delete_user(&api, &user_id).await {
                Ok(()) => {
                    log::info!("account {} deleted", user_id);
                    dispatch(&store, SessionAction::Cleared);
                }
                Err(e) => {
                    log::warn!("deleting account {} failed: {}", user_id, e);
                    dispatch(&store, SessionAction::Failed(e.to_string()));
                }
            }
        });
    });

    let sign_out = move |_: web_sys::MouseEvent| {
        let api = ctx.api();
        dispatch(&store, SessionAction::SignOutStarted);
        spawn_local(async move {
            match commands::sign_out(&api).await {
                Ok(()) => {
                    log::info!("signed out");
                    dispatch(&store, SessionAction::Cleared);
                }
                Err(e) => {
                    log::warn!("sign out failed: {}", e);
                    dispatch(&store, SessionAction::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="account-actions">
            <DeleteConfirmButton
                label="Delete Account"
                button_class="danger-link"
                on_confirm=delete_account
            />
            <span class="danger-link" on:click=sign_out>"Sign Out"</span>
        </div>
    }
}
