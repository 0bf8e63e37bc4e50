//! Listing List Component
//!
//! "Show Listings" trigger and the user's listings with edit/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::ListingSummary;
use crate::profile::ProfileState;
use crate::store::{store_user_id, use_user_store};

#[component]
pub fn ListingList(state: RwSignal<ProfileState>) -> impl IntoView {
    let store = use_user_store();
    let ctx = use_app_context();

    let show_listings = Callback::new(move |_: ()| {
        let Some(user_id) = store_user_id(&store) else { return };
        let api = ctx.api();
        state.update(|s| s.listings_requested());
        spawn_local(async move {
            let result = commands::list_user_listings(&api, &user_id).await;
            match &result {
                Ok(listings) => log::info!("loaded {} listings", listings.len()),
                Err(e) => log::warn!("loading listings failed: {}", e),
            }
            state.update(|s| s.listings_loaded(result));
        });
    });

    let delete_listing = Callback::new(move |listing_id: String| {
        let api = ctx.api();
        spawn_local(async move {
            let result = commands::delete_listing(&api, &listing_id).await;
            if let Err(e) = &result {
                log::warn!("deleting listing {} failed: {}", listing_id, e);
            }
            state.update(|s| s.listing_deleted(&listing_id, result));
        });
    });

    view! {
        <Show when=move || state.with(|s| s.show_listings_button)>
            <button type="button" class="show-listings-btn" on:click=move |_| show_listings.run(())>
                "Show Listings"
            </button>
        </Show>
        <p class="error-text">{move || state.with(|s| s.listings_error_text())}</p>
        <p class="error-text">{move || state.with(|s| s.listing_delete_error.clone().unwrap_or_default())}</p>

        <Show when=move || state.with(|s| !s.listings.is_empty())>
            <div class="listing-list">
                <h2 class="listing-heading">"Your Listings"</h2>
                <For
                    each=move || state.with(|s| s.listings.clone())
                    key=|listing| listing.id.clone()
                    children=move |listing| view! { <ListingRow listing=listing on_delete=delete_listing /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ListingRow(listing: ListingSummary, on_delete: Callback<String>) -> impl IntoView {
    let href = format!("/listing/{}", listing.id);
    let edit_href = format!("/update-listing/{}", listing.id);
    let cover = listing.cover().map(str::to_string);
    let id = listing.id.clone();

    view! {
        <div class="listing-row">
            <a href=href.clone()>
                {cover.map(|src| view! { <img class="listing-cover" src=src alt="listing-cover" /> })}
            </a>
            <a class="listing-name" href=href>
                <p>{listing.name}</p>
            </a>
            <div class="listing-actions">
                <button
                    type="button"
                    class="listing-delete-btn"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
                <a href=edit_href>
                    <button type="button" class="listing-edit-btn">"Edit"</button>
                </a>
            </div>
        </div>
    }
}
