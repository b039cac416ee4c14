//! Remote fallback resolver for trains.
//!
//! Consulted only when the local store has no record for a train number.
//! The resolver never returns an error: every failure mode (missing
//! credential, transport error, timeout, bad response shape) is logged and
//! normalized to `None`, which callers read as "entity unavailable".

use std::collections::HashMap;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{Train, TrainNumber};

use super::client::LiveApiClient;
use super::convert::train_from_remote;
use super::error::LiveApiError;
use super::types::RemoteTrain;

/// Source of remote train descriptions.
///
/// Implemented by [`LiveApiClient`] for production and by counting mocks in
/// tests, so resolver behavior can be verified without network I/O.
pub trait LiveLookup: Send + Sync + 'static {
    /// Fetch a train description by number.
    fn fetch_train(
        &self,
        number: &TrainNumber,
    ) -> impl Future<Output = Result<Option<RemoteTrain>, LiveApiError>> + Send;
}

impl LiveLookup for LiveApiClient {
    async fn fetch_train(
        &self,
        number: &TrainNumber,
    ) -> Result<Option<RemoteTrain>, LiveApiError> {
        // Inherent method on LiveApiClient does the HTTP work
        LiveApiClient::fetch_train(self, number).await
    }
}

/// An in-flight resolution, shareable between concurrent callers.
type InflightResolve = Shared<BoxFuture<'static, Option<Train>>>;

/// Best-effort train resolver over the live-train API.
///
/// Holds the credentialed client it was constructed with; a resolver built
/// via [`TrainResolver::disabled`] short-circuits every lookup to `None`
/// without any network I/O. Concurrent lookups for the same number are
/// coalesced into one outbound request; the shared entry is dropped as soon
/// as the request completes, so nothing is memoized across calls.
pub struct TrainResolver<L = LiveApiClient> {
    client: Option<Arc<L>>,
    inflight: Mutex<HashMap<TrainNumber, InflightResolve>>,
}

impl<L: LiveLookup> TrainResolver<L> {
    /// Create a resolver backed by the given client.
    pub fn new(client: L) -> Self {
        Self {
            client: Some(Arc::new(client)),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Create a resolver with no client: every lookup returns `None`.
    ///
    /// Used when no access credential is configured.
    pub fn disabled() -> Self {
        Self {
            client: None,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Whether a client is configured.
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Resolve a train number against the live API.
    ///
    /// Never errors; see the module docs for the collapse semantics.
    pub async fn resolve(&self, number: TrainNumber) -> Option<Train> {
        let client = Arc::clone(self.client.as_ref()?);

        // Join an in-flight resolution for this number, or start one.
        let fut = {
            let mut inflight = self.inflight.lock().await;
            match inflight.get(&number) {
                Some(existing) => existing.clone(),
                None => {
                    let fut = resolve_remote(client, number).boxed().shared();
                    inflight.insert(number, fut.clone());
                    fut
                }
            }
        };

        let result = fut.clone().await;

        // Whoever completes the await cleans up. The starter may have been
        // dropped mid-await (a disconnected client), so removal cannot be
        // its job alone; pointer identity keeps a later request for the
        // same number from being evicted by a straggler.
        {
            let mut inflight = self.inflight.lock().await;
            if inflight.get(&number).is_some_and(|current| current.ptr_eq(&fut)) {
                inflight.remove(&number);
            }
        }

        result
    }
}

/// Perform one remote lookup and collapse every failure to `None`.
async fn resolve_remote<L: LiveLookup>(client: Arc<L>, number: TrainNumber) -> Option<Train> {
    match client.fetch_train(&number).await {
        Ok(Some(remote)) => match train_from_remote(&number, remote) {
            Some(train) => Some(train),
            None => {
                debug!(%number, "live response carried no train name");
                None
            }
        },
        Ok(None) => {
            debug!(%number, "train unknown to live API");
            None
        }
        Err(e) => {
            warn!(%number, error = %e, "live train lookup failed");
            None
        }
    }
}
