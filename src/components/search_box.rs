//! Search Box Component

use leptos::prelude::*;

/// Text input reporting every keystroke
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Busca tu Pokémon..."
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
