//! Upstream API Bindings
//!
//! The loader talks to the catalog through `CatalogSource`; the browser build
//! plugs in `PokeApiClient`, tests plug in an in-memory double.

mod pokeapi;

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{PokemonDetail, PokemonList};

pub use pokeapi::PokeApiClient;

/// Read-only access to the upstream catalog
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the first `limit` list entries
    async fn fetch_list(&self, limit: u32) -> CatalogResult<PokemonList>;

    /// Fetch one detail record by the URL the list handed out
    async fn fetch_detail(&self, url: &str) -> CatalogResult<PokemonDetail>;
}
