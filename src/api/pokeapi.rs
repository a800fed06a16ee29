//! PokéAPI Client
//!
//! reqwest-backed `CatalogSource`. In the browser reqwest rides on `fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::CatalogSource;
use crate::config::API_BASE_URL;
use crate::error::CatalogResult;
use crate::models::{PokemonDetail, PokemonList};

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// List endpoint URL for the given page size
    pub fn list_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> CatalogResult<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

#[async_trait(?Send)]
impl CatalogSource for PokeApiClient {
    async fn fetch_list(&self, limit: u32) -> CatalogResult<PokemonList> {
        let url = self.list_url(limit);
        log::debug!("GET {}", url);
        self.get_json(&url).await
    }

    async fn fetch_detail(&self, url: &str) -> CatalogResult<PokemonDetail> {
        log::debug!("GET {}", url);
        self.get_json(url).await
    }
}
