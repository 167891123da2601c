use serde::Deserialize;
use serde_json::Value;

use super::CatalogError;

/// One raw record from the exported feed, before normalization. Field
/// names follow the feed builder's JSON output; everything except the
/// identity fields is optional so a sparse record still decodes and can
/// be judged by [`crate::catalog::CatalogStore::load`] instead of by
/// serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedRecord {
    #[serde(default)]
    pub id: Option<String>,
    /// Older exports carry the identifier under `key`; accepted as a
    /// fallback for `id`.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub community_rating: Option<f32>,
    #[serde(default)]
    pub official_rating: Option<String>,
    #[serde(default)]
    pub runtime_ticks: Option<i64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub season_count: Option<u32>,
    #[serde(default)]
    pub episode_count: Option<u32>,
    /// Jellyfin box sets, exported as `{id, name}` objects. Newer
    /// exports name the field `jellyfin_collections`.
    #[serde(default, alias = "jellyfin_collections")]
    pub collections: Vec<FeedCollection>,
    /// Plex collections arrive as bare name tags.
    #[serde(default)]
    pub plex_collections: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedCollection {
    pub name: String,
}

impl FeedRecord {
    pub fn item_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.key.as_deref())
    }
}

/// Decodes the feed document: either a bare array of records, or an
/// object carrying the combined array under `items`.
pub fn parse_feed(document: Value) -> Result<Vec<FeedRecord>, CatalogError> {
    let array = match document {
        Value::Array(_) => document,
        Value::Object(mut map) => match map.remove("items") {
            Some(items @ Value::Array(_)) => items,
            _ => return Err(CatalogError::NotAnArray),
        },
        _ => return Err(CatalogError::NotAnArray),
    };
    serde_json::from_value(array).map_err(CatalogError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_bare_array() {
        let records = parse_feed(json!([
            {"id": "m1", "title": "Alien", "type": "Movie", "year": 1979},
        ]))
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].item_id(), Some("m1"));
        assert_eq!(records[0].year, Some(1979));
    }

    #[test]
    fn unwraps_the_items_key() {
        let records = parse_feed(json!({"items": [{"key": "m2", "title": "Arrival"}]})).unwrap();
        assert_eq!(records[0].item_id(), Some("m2"));
    }

    #[test]
    fn rejects_scalar_documents() {
        assert!(matches!(
            parse_feed(json!("not a feed")),
            Err(CatalogError::NotAnArray)
        ));
        assert!(matches!(
            parse_feed(json!({"media": []})),
            Err(CatalogError::NotAnArray)
        ));
    }

    #[test]
    fn accepts_both_collection_shapes() {
        let records = parse_feed(json!([{
            "id": "m3",
            "title": "Skyfall",
            "collections": [{"id": "raw-upstream-id", "name": "James Bond"}],
            "plex_collections": ["James Bond"],
        }]))
        .unwrap();
        assert_eq!(records[0].collections[0].name, "James Bond");
        assert_eq!(records[0].plex_collections, vec!["James Bond"]);
    }
}
