//! Two-tier entity lookup.
//!
//! A lookup asks the local store first; on a train miss it delegates to the
//! remote fallback resolver. The three-way outcome (found locally, found
//! remotely, absent) collapses to `Option` for callers, and a remote result
//! is never written back into the store.

use crate::domain::{Station, StationCode, Train, TrainNumber};
use crate::live::{LiveApiClient, LiveLookup, TrainResolver};
use crate::store::FsStore;

/// Entity lookup over the local store with remote fallback for trains.
///
/// Stations have no remote tier: the fallback API only describes trains, so
/// a station miss is final.
pub struct EntityService<L = LiveApiClient> {
    store: FsStore,
    resolver: TrainResolver<L>,
}

impl<L: LiveLookup> EntityService<L> {
    /// Create a service over the given store and resolver.
    pub fn new(store: FsStore, resolver: TrainResolver<L>) -> Self {
        Self { store, resolver }
    }

    /// Look up a train: local store first, live API on miss.
    pub async fn get_train(&self, number: &TrainNumber) -> Option<Train> {
        if let Some(train) = self.store.get_train(number) {
            return Some(train);
        }
        self.resolver.resolve(*number).await
    }

    /// Look up a station in the local store.
    pub fn get_station(&self, code: &StationCode) -> Option<Station> {
        self.store.get_station(code)
    }

    /// Enumerate all locally-known train numbers.
    pub fn train_numbers(&self) -> Vec<TrainNumber> {
        self.store.list_train_numbers()
    }

    /// Enumerate all locally-known station codes.
    pub fn station_codes(&self) -> Vec<StationCode> {
        self.store.list_station_codes()
    }

    /// Whether the remote fallback is configured.
    pub fn fallback_enabled(&self) -> bool {
        self.resolver.is_enabled()
    }
}
