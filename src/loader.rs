//! Catalog Loader
//!
//! One list request, then one detail request per list entry, all in flight at
//! once. The first failure aborts the batch and nothing partial is kept.

use futures::future::try_join_all;

use crate::api::CatalogSource;
use crate::config::CATALOG_LIMIT;
use crate::error::CatalogResult;
use crate::models::CatalogEntry;

/// Where a load writes its results
///
/// The generation counter identifies the most recent load; only that load
/// may publish a catalog or clear the loading flag.
pub trait LoadTarget {
    fn set_loading(&self, loading: bool);
    fn set_catalog(&self, entries: Vec<CatalogEntry>);
    fn generation(&self) -> u64;
    fn set_generation(&self, generation: u64);
}

/// Whether a change of the session gate from `previous` to `now` starts a load
///
/// `previous` is `None` on the first evaluation at startup.
pub fn should_load(previous: Option<bool>, now: bool) -> bool {
    now && previous != Some(true)
}

/// Fetch the list and every detail record, projected into catalog entries
pub async fn load_catalog<S>(source: &S, limit: u32) -> CatalogResult<Vec<CatalogEntry>>
where
    S: CatalogSource + ?Sized,
{
    let list = source.fetch_list(limit).await?;
    log::info!("Fetching {} detail records", list.results.len());

    let details = try_join_all(list.results.iter().map(|item| source.fetch_detail(&item.url))).await?;

    Ok(details.into_iter().map(CatalogEntry::from).collect())
}

/// Run a full load against `target`
///
/// Loading is raised first and cleared at the end. A failed load is logged
/// and leaves the catalog empty. A load overtaken by a newer one drops its
/// result and leaves the loading flag to the newer load.
pub async fn refresh<S, T>(source: &S, target: &T)
where
    S: CatalogSource + ?Sized,
    T: LoadTarget + ?Sized,
{
    let generation = target.generation() + 1;
    target.set_generation(generation);
    target.set_loading(true);

    let entries = match load_catalog(source, CATALOG_LIMIT).await {
        Ok(entries) => {
            log::info!("Loaded {} catalog entries", entries.len());
            entries
        }
        Err(e) => {
            log::error!("Error fetching catalog: {}", e);
            Vec::new()
        }
    };

    if target.generation() != generation {
        log::info!("Discarding load {}, superseded by {}", generation, target.generation());
        return;
    }
    target.set_catalog(entries);
    target.set_loading(false);
}
