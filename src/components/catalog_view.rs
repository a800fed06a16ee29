//! Catalog View Component
//!
//! Logged-in page: logout control, search box and the entry grid.

use leptos::prelude::*;

use crate::components::{EntryCard, LoadingIndicator, SearchBox};
use crate::context::AppContext;
use crate::filter::GridState;
use crate::store::{store_set_query, AppStateStoreFields, AppStore};

#[component]
pub fn CatalogView(store: AppStore) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Recomputed whenever the catalog, the loading flag or the query changes
    let grid = Memo::new(move |_| {
        GridState::derive(store.loading().get(), &store.catalog().get(), &store.query().get())
    });

    view! {
        <div class="logout-container">
            <button class="logout-btn" on:click=move |_| ctx.logout()>"Cerrar Sesión"</button>
        </div>

        <main class="container">
            <header>
                <h1>"Explorer Pokédex"</h1>
                <p class="subtitle">"Descubre el increíble mundo de los Pokémon"</p>
            </header>

            <SearchBox
                value=Signal::derive(move || store.query().get())
                on_input=move |text: String| store_set_query(&store, text)
            />

            {move || match grid.get() {
                GridState::Loading => view! { <LoadingIndicator /> }.into_any(),
                GridState::Empty => view! { <div class="pokemon-grid"></div> }.into_any(),
                GridState::NoMatches => view! {
                    <div class="no-results">
                        <p>"No se encontraron Pokémon con ese nombre."</p>
                    </div>
                }.into_any(),
                GridState::Entries(entries) => view! {
                    <div class="pokemon-grid">
                        {entries.into_iter().enumerate().map(|(index, entry)| view! {
                            <EntryCard entry=entry index=index />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </main>
    }
}
