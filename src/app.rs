//! Pokédex Frontend App
//!
//! Session gate: login form or catalog view, plus the catalog load effect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::PokeApiClient;
use crate::components::{CatalogView, LoginForm};
use crate::context::AppContext;
use crate::loader;
use crate::session::{self, BrowserStorage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let ctx = AppContext::new(signal(session::check_session(&BrowserStorage)));
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(ctx);

    // Load the catalog on every transition into the authenticated state
    Effect::new(move |was_authenticated: Option<bool>| {
        let now = ctx.authenticated.get();
        if loader::should_load(was_authenticated, now) {
            log::info!("Session opened, loading catalog");
            spawn_local(async move {
                loader::refresh(&PokeApiClient::default(), &store).await;
            });
        }
        now
    });

    view! {
        <Show when=move || ctx.authenticated.get() fallback=|| view! { <LoginForm /> }>
            <CatalogView store=store />
        </Show>
    }
}
