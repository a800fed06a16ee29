//! Entry Card Component
//!
//! One grid tile: dex number, artwork, name and type badges.

use leptos::prelude::*;

use crate::models::CatalogEntry;

/// Seconds between the fade-in of consecutive cards
const STAGGER_SECS: f64 = 0.05;

/// Badge colours come from per-type CSS variables in styles.css
fn type_color(kind: &str) -> String {
    format!("var(--{})", kind)
}

#[component]
pub fn EntryCard(entry: CatalogEntry, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}s", index as f64 * STAGGER_SECS);
    let display_id = entry.display_id();
    let name = entry.name.clone();

    let image = match entry.image {
        Some(src) => view! {
            <img src=src alt=name.clone() width="150" height="150" class="pokemon-image" />
        }.into_any(),
        None => view! { <div class="pokemon-image placeholder">"?"</div> }.into_any(),
    };

    view! {
        <div class="pokemon-card" style=delay>
            <span class="pokemon-id">{display_id}</span>
            <div class="card-image-container">{image}</div>
            <h2 class="pokemon-name">{name}</h2>
            <div class="types-container">
                {entry.types.into_iter().map(|kind| {
                    let style = format!("background-color: {}", type_color(&kind));
                    view! { <span class="type-badge" style=style>{kind}</span> }
                }).collect_view()}
            </div>
        </div>
    }
}
