//! Caching layer for entity lookups.
//!
//! Sits above the two-tier lookup, so a popular train that keeps missing
//! locally does not hammer the live API from every page render. Only
//! successful lookups are cached; misses and failures always pass through,
//! which keeps "absent" an honest, re-checked answer.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Station, StationCode, Train, TrainNumber};
use crate::live::{LiveApiClient, LiveLookup};
use crate::service::EntityService;

/// Configuration for the lookup cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per entity kind.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 10_000,
        }
    }
}

/// Entity lookup with caching.
///
/// Wraps an [`EntityService`] and caches found records behind `Arc`, so
/// concurrent page renders share one copy.
pub struct CachedLookup<L = LiveApiClient> {
    service: EntityService<L>,
    trains: MokaCache<TrainNumber, Arc<Train>>,
    stations: MokaCache<StationCode, Arc<Station>>,
}

impl<L: LiveLookup> CachedLookup<L> {
    /// Create a new cached lookup.
    pub fn new(service: EntityService<L>, config: &CacheConfig) -> Self {
        let trains = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        let stations = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            service,
            trains,
            stations,
        }
    }

    /// Look up a train, using the cache if available.
    pub async fn get_train(&self, number: &TrainNumber) -> Option<Arc<Train>> {
        if let Some(cached) = self.trains.get(number).await {
            return Some(cached);
        }

        let train = Arc::new(self.service.get_train(number).await?);
        self.trains.insert(*number, train.clone()).await;
        Some(train)
    }

    /// Look up a station, using the cache if available.
    pub async fn get_station(&self, code: &StationCode) -> Option<Arc<Station>> {
        if let Some(cached) = self.stations.get(code).await {
            return Some(cached);
        }

        let station = Arc::new(self.service.get_station(code)?);
        self.stations.insert(*code, station.clone()).await;
        Some(station)
    }

    /// Access the underlying service for operations that bypass the cache.
    pub fn service(&self) -> &EntityService<L> {
        &self.service
    }

    /// Enumerate all locally-known train numbers (uncached).
    pub fn train_numbers(&self) -> Vec<TrainNumber> {
        self.service.train_numbers()
    }

    /// Enumerate all locally-known station codes (uncached).
    pub fn station_codes(&self) -> Vec<StationCode> {
        self.service.station_codes()
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use tempfile::tempdir;

    use super::*;
    use crate::live::TrainResolver;
    use crate::store::FsStore;

    const RAJDHANI: &str = r#"{
        "number": "12951",
        "name": "Mumbai Rajdhani",
        "type": "Rajdhani",
        "source": "Mumbai Central",
        "sourceCode": "BCT",
        "destination": "New Delhi",
        "destinationCode": "NDLS",
        "departureTime": "17:00",
        "arrivalTime": "08:32",
        "duration": "15h 32m",
        "distance": "1384 km",
        "classes": ["1A", "2A", "3A"],
        "frequency": "Daily"
    }"#;

    fn seed(dir: &Path, collection: &str, key: &str, body: &str) -> PathBuf {
        let coll = dir.join(collection);
        std::fs::create_dir_all(&coll).unwrap();
        let path = coll.join(format!("{key}.json"));
        std::fs::write(&path, body).unwrap();
        path
    }

    fn lookup_over(dir: &Path) -> CachedLookup<LiveApiClient> {
        let service = EntityService::new(FsStore::new(dir), TrainResolver::disabled());
        CachedLookup::new(service, &CacheConfig::default())
    }

    fn number(s: &str) -> TrainNumber {
        TrainNumber::parse(s).unwrap()
    }

    #[tokio::test]
    async fn hit_is_served_from_cache() {
        let dir = tempdir().unwrap();
        let path = seed(dir.path(), "trains", "12951", RAJDHANI);
        let lookup = lookup_over(dir.path());

        let first = lookup.get_train(&number("12951")).await.unwrap();
        assert_eq!(first.name, "Mumbai Rajdhani");

        // Remove the backing file: a cached entry must still answer
        std::fs::remove_file(path).unwrap();
        let second = lookup.get_train(&number("12951")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn miss_is_not_cached() {
        let dir = tempdir().unwrap();
        let lookup = lookup_over(dir.path());

        assert!(lookup.get_train(&number("12951")).await.is_none());

        // Seeding after a miss must be visible immediately
        seed(dir.path(), "trains", "12951", RAJDHANI);
        assert!(lookup.get_train(&number("12951")).await.is_some());
    }

    #[tokio::test]
    async fn station_cache_behaves_like_train_cache() {
        let dir = tempdir().unwrap();
        let path = seed(
            dir.path(),
            "stations",
            "NDLS",
            r#"{
                "code": "NDLS",
                "name": "New Delhi",
                "fullName": "New Delhi Railway Station",
                "zone": "Northern Railway",
                "state": "Delhi",
                "category": "A1"
            }"#,
        );
        let lookup = lookup_over(dir.path());
        let code = StationCode::parse("NDLS").unwrap();

        let first = lookup.get_station(&code).await.unwrap();
        std::fs::remove_file(path).unwrap();
        let second = lookup.get_station(&code).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(60));
        assert_eq!(config.max_capacity, 10_000);
    }
}
