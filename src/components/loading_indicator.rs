use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loader"></div>
            <p class="loading-text">"Cargando Pokémon..."</p>
        </div>
    }
}
