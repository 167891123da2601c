use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use marquee::core::CardSurface;
use marquee::models::{MediaItem, MediaKind};

/// Feed-record builder for tests, mirroring the exporter's JSON shape.
pub struct FeedItemBuilder {
    value: Value,
}

impl FeedItemBuilder {
    pub fn movie(id: &str, title: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "title": title,
                "type": "Movie",
                "poster_path": format!("posters/{id}.jpg"),
            }),
        }
    }

    pub fn series(id: &str, title: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "title": title,
                "type": "Series",
            }),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.value["year"] = json!(year);
        self
    }

    pub fn size(mut self, bytes: u64) -> Self {
        self.value["size"] = json!(bytes);
        self
    }

    pub fn genres(mut self, genres: &[&str]) -> Self {
        self.value["genres"] = json!(genres);
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.value["source"] = json!(source);
        self
    }

    pub fn jellyfin_collection(mut self, name: &str) -> Self {
        let list = self.value["collections"].as_array_mut().map(std::mem::take);
        let mut list = list.unwrap_or_default();
        list.push(json!({"name": name}));
        self.value["collections"] = Value::Array(list);
        self
    }

    pub fn plex_collection(mut self, name: &str) -> Self {
        let list = self.value["plex_collections"]
            .as_array_mut()
            .map(std::mem::take);
        let mut list = list.unwrap_or_default();
        list.push(json!(name));
        self.value["plex_collections"] = Value::Array(list);
        self
    }

    pub fn build(self) -> Value {
        self.value
    }
}

pub fn feed(items: Vec<Value>) -> Value {
    Value::Array(items)
}

/// Card surface that remembers everything the engine did to it, for
/// asserting render order and scroll targets.
#[derive(Default)]
pub struct RecordingSurface {
    pub movies: Vec<String>,
    pub series: Vec<String>,
    pub scrolls: Vec<(MediaKind, char)>,
}

impl RecordingSurface {
    pub fn shared() -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::default()))
    }

    fn lane(&mut self, kind: MediaKind) -> &mut Vec<String> {
        match kind {
            MediaKind::Movie => &mut self.movies,
            MediaKind::Series => &mut self.series,
        }
    }
}

impl CardSurface for RecordingSurface {
    fn clear(&mut self, kind: MediaKind) {
        self.lane(kind).clear();
    }

    fn append(&mut self, kind: MediaKind, items: &[Arc<MediaItem>]) {
        let lane = self.lane(kind);
        lane.extend(items.iter().map(|i| i.title.clone()));
    }

    fn scroll_to_letter(&mut self, kind: MediaKind, letter: char) {
        self.scrolls.push((kind, letter));
    }
}
