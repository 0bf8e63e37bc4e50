//! Estate Profile App
//!
//! Root component: session store, API handle, and the profile page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::ApiClient;
use crate::components::ProfilePage;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session;
use crate::store::{store_current_user, store_is_signed_in, UserState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Session survives reloads through localStorage
    let store = Store::new(UserState::new(session::load_user()));
    provide_context(store);

    let api = match ApiClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("{}", e);
            return view! { <p class="error-text">{e.to_string()}</p> }.into_any();
        }
    };
    provide_context(AppContext::new(api, &config));

    Effect::new(move |_| match store_current_user(&store) {
        Some(user) => session::save_user(&user),
        None => session::clear_user(),
    });

    view! {
        <main class="profile-layout">
            <Show when=move || store_is_signed_in(&store) fallback=|| view! { <SignedOut /> }>
                <ProfilePage />
            </Show>
        </main>
    }
    .into_any()
}

#[component]
fn SignedOut() -> impl IntoView {
    view! {
        <div class="signed-out">
            <h1 class="profile-title">"Profile"</h1>
            <p>"You are signed out."</p>
            <a href="/sign-in">"Sign in"</a>
        </div>
    }
}
