//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directory::{SearchMatches, StationSummary, TrainSummary};

/// Request to search the directory.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Query string: a name fragment, train number, or station code
    pub q: String,

    /// Maximum results per entity kind (capped server-side)
    pub limit: Option<usize>,
}

/// A train in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainHit {
    pub number: String,
    pub name: String,
    pub source_code: String,
    pub destination_code: String,
}

/// A station in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationHit {
    pub code: String,
    pub name: String,
}

/// Response for a directory search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub trains: Vec<TrainHit>,
    pub stations: Vec<StationHit>,
}

impl From<SearchMatches> for SearchResponse {
    fn from(matches: SearchMatches) -> Self {
        Self {
            trains: matches.trains.into_iter().map(TrainHit::from).collect(),
            stations: matches.stations.into_iter().map(StationHit::from).collect(),
        }
    }
}

impl From<TrainSummary> for TrainHit {
    fn from(t: TrainSummary) -> Self {
        Self {
            number: t.number,
            name: t.name,
            source_code: t.source_code,
            destination_code: t.destination_code,
        }
    }
}

impl From<StationSummary> for StationHit {
    fn from(s: StationSummary) -> Self {
        Self {
            code: s.code,
            name: s.name,
        }
    }
}

/// Response enumerating all known train numbers.
///
/// Consumed by static-generation and sitemap collaborators.
#[derive(Debug, Serialize)]
pub struct TrainKeysResponse {
    pub numbers: Vec<String>,
}

/// Response enumerating all known station codes.
#[derive(Debug, Serialize)]
pub struct StationKeysResponse {
    pub codes: Vec<String>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
