//! Avatar Upload Component
//!
//! Clickable avatar backed by a hidden file input, with upload status line.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::profile::ProfileState;
use crate::storage::{self, UploadEvent};
use crate::store::{store_avatar, use_user_store};

#[component]
pub fn AvatarUpload(state: RwSignal<ProfileState>) -> impl IntoView {
    let store = use_user_store();
    let ctx = use_app_context();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Re-selecting the same file must fire `change` again
        input.set_value("");
        if let Some(file) = file {
            start_upload(state, &file, ctx.max_avatar_bytes);
        }
    };

    let avatar_src = move || {
        let stored = store_avatar(&store);
        state.with(|s| s.avatar_src(&stored))
    };
    let status = move || state.with(|s| s.upload.status());

    view! {
        <input
            type="file"
            accept="image/*"
            hidden=true
            node_ref=file_input
            on:change=on_change
        />
        <img
            class="avatar"
            src=avatar_src
            alt="profile"
            on:click=move |_| {
                if let Some(input) = file_input.get() {
                    input.click();
                }
            }
        />
        <p class=move || status().class()>{move || status().message()}</p>
    }
}

fn start_upload(state: RwSignal<ProfileState>, file: &web_sys::File, limit: u64) {
    if let Err(err) = storage::check_avatar(file.size() as u64, &file.type_(), limit) {
        log::warn!("avatar rejected: {}", err);
        state.update(|s| s.upload_rejected());
        return;
    }

    let key = storage::object_key(js_sys::Date::now() as u64, &file.name());
    log::info!("uploading avatar as {}", key);
    let attempt = state.try_update(|s| s.upload_started()).unwrap_or_default();

    let result = storage::upload_avatar(file, &key, move |event| {
        state.update(|s| s.apply_upload(attempt, event));
    });
    if let Err(err) = result {
        log::error!("avatar upload could not start: {}", err);
        state.update(|s| s.apply_upload(attempt, UploadEvent::Failed(err.to_string())));
    }
}
