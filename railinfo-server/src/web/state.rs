//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedLookup;
use crate::directory::Directory;
use crate::pnr::PnrClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The PNR client is
/// optional: without a credential the PNR route reports "unavailable".
#[derive(Clone)]
pub struct AppState {
    /// Cached two-tier entity lookup
    pub lookup: Arc<CachedLookup>,

    /// Searchable train/station directory
    pub directory: Directory,

    /// PNR-status client, if configured
    pub pnr: Option<Arc<PnrClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(lookup: CachedLookup, directory: Directory, pnr: Option<PnrClient>) -> Self {
        Self {
            lookup: Arc::new(lookup),
            directory,
            pnr: pnr.map(Arc::new),
        }
    }
}
