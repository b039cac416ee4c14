//! File-system-backed entity store.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Station, StationCode, Train, TrainNumber};

/// Internal read outcome, kept distinct from plain absence so that data
/// corruption is observable in the logs before being collapsed to `None`
/// at the public boundary.
#[derive(Debug)]
enum ReadError {
    /// The document file does not exist.
    NotFound,
    /// The file exists but could not be read.
    Io(std::io::Error),
    /// The file was read but is not a valid document.
    Malformed(serde_json::Error),
}

/// Read-only store of per-entity JSON documents.
///
/// Documents live at `{data_dir}/trains/{number}.json` and
/// `{data_dir}/stations/{CODE}.json`, one record per file, keyed by the
/// file stem. The store never writes; entities are seeded out of band and
/// are immutable at runtime.
///
/// Every failure mode (absent file, unreadable file, malformed JSON)
/// collapses to `None` for callers. Malformed and unreadable documents are
/// logged at `warn` so corruption is distinguishable from true absence in
/// the logs.
#[derive(Debug, Clone)]
pub struct FsStore {
    trains_dir: PathBuf,
    stations_dir: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// The directory does not need to exist; lookups against a missing
    /// directory simply find nothing.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            trains_dir: data_dir.join("trains"),
            stations_dir: data_dir.join("stations"),
        }
    }

    /// Look up a train by number.
    pub fn get_train(&self, number: &TrainNumber) -> Option<Train> {
        let path = self.trains_dir.join(format!("{}.json", number.as_str()));
        self.read_document(&path)
    }

    /// Look up a station by code.
    pub fn get_station(&self, code: &StationCode) -> Option<Station> {
        let path = self.stations_dir.join(format!("{}.json", code.as_str()));
        self.read_document(&path)
    }

    /// List all train numbers present in the store.
    ///
    /// No ordering guarantee beyond the directory's iteration order. An
    /// unreadable directory yields an empty list.
    pub fn list_train_numbers(&self) -> Vec<TrainNumber> {
        list_keys(&self.trains_dir, TrainNumber::parse)
    }

    /// List all station codes present in the store.
    pub fn list_station_codes(&self) -> Vec<StationCode> {
        list_keys(&self.stations_dir, StationCode::parse)
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        match read_json(path) {
            Ok(doc) => Some(doc),
            Err(ReadError::NotFound) => None,
            Err(ReadError::Io(e)) => {
                warn!(path = %path.display(), error = %e, "failed to read entity document");
                None
            }
            Err(ReadError::Malformed(e)) => {
                warn!(path = %path.display(), error = %e, "malformed entity document");
                None
            }
        }
    }
}

/// Read and parse a single JSON document.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ReadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadError::NotFound
        } else {
            ReadError::Io(e)
        }
    })?;

    serde_json::from_str(&contents).map_err(ReadError::Malformed)
}

/// Enumerate `{key}.json` entries in a collection directory, parsing each
/// file stem with `parse_key`. Entries with stems that are not valid keys
/// are skipped.
fn list_keys<K, E>(dir: &Path, parse_key: impl Fn(&str) -> Result<K, E>) -> Vec<K> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        debug!(path = %dir.display(), "collection directory not readable");
        return Vec::new();
    };

    let mut keys = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match parse_key(stem) {
            Ok(key) => keys.push(key),
            Err(_) => {
                debug!(path = %path.display(), "skipping document with invalid key in filename");
            }
        }
    }
    keys
}
