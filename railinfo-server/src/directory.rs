//! Searchable train/station directory.
//!
//! An in-memory name index built from the store at startup, backing the
//! site's directory pages and search box. Lookups stay on the store; the
//! directory only knows names, keys, and route endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::FsStore;

/// Directory entry for a train.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSummary {
    pub number: String,
    pub name: String,
    pub source_code: String,
    pub destination_code: String,
}

/// Directory entry for a station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSummary {
    pub code: String,
    pub name: String,
}

/// Result of a directory search.
#[derive(Debug, Default)]
pub struct SearchMatches {
    pub trains: Vec<TrainSummary>,
    pub stations: Vec<StationSummary>,
}

#[derive(Default)]
struct Index {
    trains: Vec<TrainSummary>,
    stations: Vec<StationSummary>,
}

/// Thread-safe directory of known trains and stations.
///
/// Built once at startup by walking the store; `refresh` rebuilds it
/// wholesale (the store itself is immutable at runtime, so this matters
/// only across redeploys with new seed data).
#[derive(Clone)]
pub struct Directory {
    inner: Arc<RwLock<Index>>,
}

impl Directory {
    /// Build the directory by enumerating and loading every store entry.
    pub fn build(store: &FsStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(build_index(store))),
        }
    }

    /// Number of trains in the directory.
    pub async fn train_count(&self) -> usize {
        self.inner.read().await.trains.len()
    }

    /// Number of stations in the directory.
    pub async fn station_count(&self) -> usize {
        self.inner.read().await.stations.len()
    }

    /// Search trains and stations by name or key.
    ///
    /// Case-insensitive. A train matches when its number starts with the
    /// query or its name contains it; a station matches on code prefix or
    /// name substring. Each result list is capped at `limit`.
    pub async fn search(&self, query: &str, limit: usize) -> SearchMatches {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchMatches::default();
        }

        let index = self.inner.read().await;

        let trains = index
            .trains
            .iter()
            .filter(|t| t.number.starts_with(&needle) || t.name.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect();

        let stations = index
            .stations
            .iter()
            .filter(|s| {
                s.code.to_lowercase().starts_with(&needle)
                    || s.name.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect();

        SearchMatches { trains, stations }
    }

    /// Rebuild the index from the store.
    ///
    /// Returns the new (train, station) counts. The old index stays in
    /// place until the rebuild completes.
    pub async fn refresh(&self, store: &FsStore) -> (usize, usize) {
        let index = build_index(store);
        let counts = (index.trains.len(), index.stations.len());

        let mut guard = self.inner.write().await;
        *guard = index;

        counts
    }
}

fn build_index(store: &FsStore) -> Index {
    let mut trains: Vec<TrainSummary> = store
        .list_train_numbers()
        .iter()
        .filter_map(|number| {
            store.get_train(number).map(|t| TrainSummary {
                number: t.number,
                name: t.name,
                source_code: t.source_code,
                destination_code: t.destination_code,
            })
        })
        .collect();
    trains.sort_by(|a, b| a.number.cmp(&b.number));

    let mut stations: Vec<StationSummary> = store
        .list_station_codes()
        .iter()
        .filter_map(|code| {
            store.get_station(code).map(|s| StationSummary {
                code: s.code,
                name: s.name,
            })
        })
        .collect();
    stations.sort_by(|a, b| a.code.cmp(&b.code));

    Index { trains, stations }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::tempdir;

    use super::*;

    fn seed(dir: &Path, collection: &str, key: &str, body: &str) {
        let coll = dir.join(collection);
        std::fs::create_dir_all(&coll).unwrap();
        std::fs::write(coll.join(format!("{key}.json")), body).unwrap();
    }

    fn seed_train(dir: &Path, num: &str, name: &str) {
        seed(
            dir,
            "trains",
            num,
            &format!(
                r#"{{
                    "number": "{num}",
                    "name": "{name}",
                    "type": "Express",
                    "source": "A",
                    "sourceCode": "AAA",
                    "destination": "B",
                    "destinationCode": "BBB",
                    "departureTime": "10:00",
                    "arrivalTime": "20:00",
                    "duration": "10h",
                    "distance": "800 km",
                    "frequency": "Daily"
                }}"#
            ),
        );
    }

    fn seed_station(dir: &Path, code: &str, name: &str) {
        seed(
            dir,
            "stations",
            code,
            &format!(
                r#"{{
                    "code": "{code}",
                    "name": "{name}",
                    "fullName": "{name} Railway Station",
                    "zone": "Northern Railway",
                    "state": "Delhi",
                    "category": "A1"
                }}"#
            ),
        );
    }

    #[tokio::test]
    async fn build_indexes_all_entries() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        seed_train(dir.path(), "12627", "Karnataka Express");
        seed_station(dir.path(), "NDLS", "New Delhi");
        let store = FsStore::new(dir.path());

        let directory = Directory::build(&store);
        assert_eq!(directory.train_count().await, 2);
        assert_eq!(directory.station_count().await, 1);
    }

    #[tokio::test]
    async fn malformed_entries_are_skipped() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        seed(dir.path(), "trains", "12627", "{broken");
        let store = FsStore::new(dir.path());

        let directory = Directory::build(&store);
        assert_eq!(directory.train_count().await, 1);
    }

    #[tokio::test]
    async fn search_matches_train_name() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        seed_train(dir.path(), "12627", "Karnataka Express");
        let directory = Directory::build(&FsStore::new(dir.path()));

        let matches = directory.search("rajdhani", 10).await;
        assert_eq!(matches.trains.len(), 1);
        assert_eq!(matches.trains[0].number, "12951");
    }

    #[tokio::test]
    async fn search_matches_number_prefix() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        seed_train(dir.path(), "12627", "Karnataka Express");
        let directory = Directory::build(&FsStore::new(dir.path()));

        let matches = directory.search("129", 10).await;
        assert_eq!(matches.trains.len(), 1);
        assert_eq!(matches.trains[0].number, "12951");
    }

    #[tokio::test]
    async fn search_matches_station_code_case_insensitively() {
        let dir = tempdir().unwrap();
        seed_station(dir.path(), "NDLS", "New Delhi");
        seed_station(dir.path(), "BCT", "Mumbai Central");
        let directory = Directory::build(&FsStore::new(dir.path()));

        let matches = directory.search("ndls", 10).await;
        assert_eq!(matches.stations.len(), 1);
        assert_eq!(matches.stations[0].code, "NDLS");

        let matches = directory.search("mumbai", 10).await;
        assert_eq!(matches.stations.len(), 1);
        assert_eq!(matches.stations[0].code, "BCT");
        assert!(matches.trains.is_empty());
    }

    #[tokio::test]
    async fn search_respects_limit() {
        let dir = tempdir().unwrap();
        for i in 0..20 {
            seed_train(dir.path(), &format!("129{i:02}"), "Some Express");
        }
        let directory = Directory::build(&FsStore::new(dir.path()));

        let matches = directory.search("express", 5).await;
        assert_eq!(matches.trains.len(), 5);
    }

    #[tokio::test]
    async fn empty_query_matches_nothing() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        let directory = Directory::build(&FsStore::new(dir.path()));

        let matches = directory.search("   ", 10).await;
        assert!(matches.trains.is_empty());
        assert!(matches.stations.is_empty());
    }

    #[tokio::test]
    async fn refresh_picks_up_new_documents() {
        let dir = tempdir().unwrap();
        seed_train(dir.path(), "12951", "Mumbai Rajdhani");
        let store = FsStore::new(dir.path());
        let directory = Directory::build(&store);
        assert_eq!(directory.train_count().await, 1);

        seed_train(dir.path(), "12627", "Karnataka Express");
        let (trains, stations) = directory.refresh(&store).await;
        assert_eq!(trains, 2);
        assert_eq!(stations, 0);
        assert_eq!(directory.train_count().await, 2);
    }
}
