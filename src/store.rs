//! Repository traits and the JSON-file store backing the CLI.
//!
//! The share pipeline never talks to persistence directly — it depends on
//! three narrow read-only traits, one per aggregate. The application that
//! embeds the pipeline supplies implementations over whatever database it
//! uses; the CLI (and the tests) use [`JsonStore`], which loads a single
//! JSON document holding the full trip graph:
//!
//! ```json
//! {
//!   "trips":   [{ "id": "t1", "title": "Japan 2024", ... }],
//!   "cities":  [{ "id": "c1", "trip_id": "t1", "name": "Tokyo", ... }],
//!   "entries": [{ "id": "e1", "trip_id": "t1", "city_id": "c1", ... }]
//! }
//! ```
//!
//! Entries in the store already embed their tags and photos, so "with
//! relations" reads are plain filters here.

use crate::model::{City, Entry, Trip};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to trips.
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn by_id(&self, trip_id: &str) -> Result<Option<Trip>, StoreError>;
}

/// Read access to a trip's cities.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn by_trip_id(&self, trip_id: &str) -> Result<Vec<City>, StoreError>;
}

/// Read access to a trip's entries, tags and photos included.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn by_trip_id_with_relations(&self, trip_id: &str) -> Result<Vec<Entry>, StoreError>;
}

/// In-memory store loaded from one JSON file. Implements all three
/// repository traits; reads are filters over the loaded vectors.
#[derive(Debug, Deserialize)]
pub struct JsonStore {
    #[serde(default)]
    trips: Vec<Trip>,
    #[serde(default)]
    cities: Vec<City>,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl JsonStore {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(store)
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}

#[async_trait]
impl TripRepository for JsonStore {
    async fn by_id(&self, trip_id: &str) -> Result<Option<Trip>, StoreError> {
        Ok(self.trips.iter().find(|t| t.id == trip_id).cloned())
    }
}

#[async_trait]
impl CityRepository for JsonStore {
    async fn by_trip_id(&self, trip_id: &str) -> Result<Vec<City>, StoreError> {
        Ok(self
            .cities
            .iter()
            .filter(|c| c.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EntryRepository for JsonStore {
    async fn by_trip_id_with_relations(&self, trip_id: &str) -> Result<Vec<Entry>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = r#"{
        "trips": [
            {"id": "t1", "title": "Japan 2024", "location": "Japan",
             "start_date": "2024-05-01", "end_date": "2024-05-14"}
        ],
        "cities": [
            {"id": "c1", "trip_id": "t1", "name": "Tokyo", "order_index": 0},
            {"id": "c2", "trip_id": "t1", "name": "Kyoto", "order_index": 1},
            {"id": "x1", "trip_id": "other", "name": "Lisbon", "order_index": 0}
        ],
        "entries": [
            {"id": "e1", "trip_id": "t1", "city_id": "c1", "entry_type": "place",
             "title": "Senso-ji", "rating": 4, "date": "2024-05-02",
             "tags": [{"id": "g1", "name": "Temples"}]},
            {"id": "e2", "trip_id": "other", "entry_type": "moment",
             "title": "Elsewhere", "date": "2024-06-01"}
        ]
    }"#;

    fn write_fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("store.json");
        fs::write(&path, FIXTURE).unwrap();
        path
    }

    #[tokio::test]
    async fn trip_lookup_by_id() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::load(&write_fixture(&dir)).unwrap();

        let trip = store.by_id("t1").await.unwrap().unwrap();
        assert_eq!(trip.title, "Japan 2024");
        assert!(store.by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn cities_filtered_to_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::load(&write_fixture(&dir)).unwrap();

        let cities = store.by_trip_id("t1").await.unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tokyo", "Kyoto"]);
    }

    #[tokio::test]
    async fn entries_filtered_to_trip_with_relations() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::load(&write_fixture(&dir)).unwrap();

        let entries = store.by_trip_id_with_relations("t1").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tags[0].name, "Temples");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = JsonStore::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(JsonStore::load(&path), Err(StoreError::Json { .. })));
    }

    #[test]
    fn sections_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();
        let store = JsonStore::load(&path).unwrap();
        assert_eq!(store.trip_count(), 0);
    }
}
