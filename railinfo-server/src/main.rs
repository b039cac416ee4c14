use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use railinfo_server::cache::{CacheConfig, CachedLookup};
use railinfo_server::directory::Directory;
use railinfo_server::live::{LiveApiClient, LiveApiConfig, TrainResolver};
use railinfo_server::pnr::{PnrClient, PnrConfig};
use railinfo_server::service::EntityService;
use railinfo_server::store::FsStore;
use railinfo_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("railinfo_server=info,tower_http=info")),
        )
        .init();

    // Seed data directory
    let data_dir = std::env::var("RAIL_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let store = FsStore::new(&data_dir);

    // Remote train fallback: disabled when no credential is configured
    let resolver = match std::env::var("LIVE_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let mut config = LiveApiConfig::new(&key);
            if let Ok(base_url) = std::env::var("LIVE_API_BASE_URL") {
                config = config.with_base_url(base_url);
            }
            let client = LiveApiClient::new(config).expect("Failed to create live-train client");
            TrainResolver::new(client)
        }
        _ => {
            eprintln!("Warning: LIVE_API_KEY not set. Remote train fallback disabled.");
            TrainResolver::disabled()
        }
    };

    // PNR status proxy, also credential-gated
    let pnr = match std::env::var("PNR_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let client =
                PnrClient::new(PnrConfig::new(&key)).expect("Failed to create PNR client");
            Some(client)
        }
        _ => {
            eprintln!("Warning: PNR_API_KEY not set. PNR status lookups disabled.");
            None
        }
    };

    // Build the directory index from the store
    let directory = Directory::build(&store);
    println!(
        "Indexed {} trains and {} stations from {}",
        directory.train_count().await,
        directory.station_count().await,
        data_dir
    );

    // Compose the cached two-tier lookup
    let service = EntityService::new(store, resolver);
    let lookup = CachedLookup::new(service, &CacheConfig::default());

    let state = AppState::new(lookup, directory, pnr);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Rail info service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                - Health check");
    println!("  GET /api/trains            - List known train numbers");
    println!("  GET /api/trains/:number    - Train by number (live fallback on miss)");
    println!("  GET /api/stations          - List known station codes");
    println!("  GET /api/stations/:code    - Station by code");
    println!("  GET /api/search?q=         - Search the directory");
    println!("  GET /api/pnr/:pnr          - PNR booking status");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
