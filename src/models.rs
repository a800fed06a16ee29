//! Frontend Models
//!
//! Display records plus the PokéAPI payloads they are built from.

use serde::{Deserialize, Serialize};

/// Display-ready catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
}

impl CatalogEntry {
    /// Dex number padded to at least three digits, e.g. `#007`
    pub fn display_id(&self) -> String {
        format!("#{:03}", self.id)
    }
}

impl From<PokemonDetail> for CatalogEntry {
    fn from(detail: PokemonDetail) -> Self {
        let artwork = detail
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);
        Self {
            id: detail.id,
            name: detail.name,
            image: artwork.or(detail.sprites.front_default),
            types: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
        }
    }
}

// ========================
// Upstream Payloads
// ========================

/// List entry; only the detail URL is followed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListItem {
    pub url: String,
}

/// List endpoint page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonList {
    pub results: Vec<ListItem>,
}

/// Detail endpoint record (only the fields the grid needs)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail(value: serde_json::Value) -> PokemonDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_prefers_official_artwork() {
        let entry = CatalogEntry::from(detail(json!({
            "id": 1,
            "name": "bulbasaur",
            "sprites": {
                "front_default": "https://img/sprite/1.png",
                "other": { "official-artwork": { "front_default": "https://img/art/1.png" } }
            },
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
            ]
        })));

        assert_eq!(entry.id, 1);
        assert_eq!(entry.name, "bulbasaur");
        assert_eq!(entry.image.as_deref(), Some("https://img/art/1.png"));
        assert_eq!(entry.types, vec!["grass", "poison"]);
    }

    #[test]
    fn test_falls_back_to_sprite() {
        let entry = CatalogEntry::from(detail(json!({
            "id": 25,
            "name": "pikachu",
            "sprites": {
                "front_default": "https://img/sprite/25.png",
                "other": { "official-artwork": { "front_default": null } }
            },
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "u" } }]
        })));
        assert_eq!(entry.image.as_deref(), Some("https://img/sprite/25.png"));
    }

    #[test]
    fn test_no_image_at_all() {
        let entry = CatalogEntry::from(detail(json!({
            "id": 10001,
            "name": "deoxys-attack",
            "sprites": { "front_default": null },
            "types": []
        })));
        assert_eq!(entry.image, None);
        assert!(entry.types.is_empty());
    }

    #[test]
    fn test_type_order_is_source_order() {
        // slot numbers are ignored; array order wins
        let entry = CatalogEntry::from(detail(json!({
            "id": 6,
            "name": "charizard",
            "sprites": { "front_default": null },
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "u" } },
                { "slot": 1, "type": { "name": "fire", "url": "u" } }
            ]
        })));
        assert_eq!(entry.types, vec!["flying", "fire"]);
    }

    #[test]
    fn test_minimal_list_page() {
        let list: PokemonList = serde_json::from_value(json!({
            "results": [
                { "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }))
        .unwrap();
        let urls: Vec<_> = list.results.iter().map(|item| item.url.as_str()).collect();
        assert_eq!(urls, vec!["https://pokeapi.co/api/v2/pokemon/1/", "https://pokeapi.co/api/v2/pokemon/2/"]);
    }

    #[test]
    fn test_minimal_detail_record() {
        let entry = CatalogEntry::from(detail(json!({
            "id": 1,
            "name": "bulbasaur",
            "sprites": {
                "front_default": "https://img/sprite/1.png",
                "other": { "official-artwork": { "front_default": "https://img/art/1.png" } }
            },
            "types": [{ "type": { "name": "grass" } }, { "type": { "name": "poison" } }]
        })));
        assert_eq!(entry.types, vec!["grass", "poison"]);
        assert_eq!(entry.image.as_deref(), Some("https://img/art/1.png"));
    }

    #[test]
    fn test_display_id_padding() {
        let mut entry = CatalogEntry { id: 7, name: "squirtle".into(), image: None, types: vec![] };
        assert_eq!(entry.display_id(), "#007");
        entry.id = 1025;
        assert_eq!(entry.display_id(), "#1025");
    }
}
