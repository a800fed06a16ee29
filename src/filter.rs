//! Search Filter
//!
//! Derives what the grid shows from the loaded catalog and the search text.

use crate::models::CatalogEntry;

/// Entries whose name contains `query`, ignoring case, in catalog order
pub fn filter_catalog(catalog: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the catalog area should render
#[derive(Debug, Clone, PartialEq)]
pub enum GridState {
    /// A load is in flight
    Loading,
    /// Nothing loaded. A failed load and an empty upstream look the same here.
    Empty,
    /// Catalog has entries but none match the search text
    NoMatches,
    /// Entries to draw, already filtered
    Entries(Vec<CatalogEntry>),
}

impl GridState {
    pub fn derive(loading: bool, catalog: &[CatalogEntry], query: &str) -> Self {
        if loading {
            return GridState::Loading;
        }
        if catalog.is_empty() {
            return GridState::Empty;
        }
        let visible = filter_catalog(catalog, query);
        if visible.is_empty() {
            GridState::NoMatches
        } else {
            GridState::Entries(visible)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, name: &str) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            image: None,
            types: vec!["normal".to_string()],
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry(1, "bulbasaur"),
            entry(4, "charmander"),
            entry(5, "charmeleon"),
            entry(6, "charizard"),
            entry(25, "pikachu"),
            entry(122, "Mr-Mime"),
        ]
    }

    fn names(entries: &[CatalogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = catalog();
        assert_eq!(filter_catalog(&all, ""), all);
    }

    #[test]
    fn test_substring_match_keeps_order() {
        let all = catalog();
        let hits = filter_catalog(&all, "char");
        assert_eq!(names(&hits), vec!["charmander", "charmeleon", "charizard"]);
    }

    #[test]
    fn test_case_insensitive_both_ways() {
        let all = catalog();
        assert_eq!(names(&filter_catalog(&all, "PIKA")), vec!["pikachu"]);
        assert_eq!(names(&filter_catalog(&all, "mime")), vec!["Mr-Mime"]);
        assert_eq!(names(&filter_catalog(&all, "mR-")), vec!["Mr-Mime"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_catalog(&catalog(), "mewtwo").is_empty());
    }

    #[test]
    fn test_result_is_exact_subsequence() {
        let all = catalog();
        for query in ["a", "ar", "m", "e", "zz", "saur", "-"] {
            let hits = filter_catalog(&all, query);
            let expected: Vec<_> = all
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&query.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(hits, expected, "query {:?}", query);
        }
    }

    #[test]
    fn test_grid_loading_wins() {
        assert_eq!(GridState::derive(true, &catalog(), "char"), GridState::Loading);
        assert_eq!(GridState::derive(true, &[], ""), GridState::Loading);
    }

    #[test]
    fn test_grid_empty_catalog() {
        assert_eq!(GridState::derive(false, &[], ""), GridState::Empty);
        assert_eq!(GridState::derive(false, &[], "pika"), GridState::Empty);
    }

    #[test]
    fn test_grid_no_matches() {
        assert_eq!(GridState::derive(false, &catalog(), "mewtwo"), GridState::NoMatches);
    }

    #[test]
    fn test_grid_entries() {
        match GridState::derive(false, &catalog(), "saur") {
            GridState::Entries(entries) => assert_eq!(names(&entries), vec!["bulbasaur"]),
            other => panic!("unexpected state {:?}", other),
        }
    }
}
