//! Station record.

use serde::{Deserialize, Serialize};

/// A station in the directory.
///
/// Fields mirror the on-disk JSON documents one-to-one. `zone` and `state`
/// are free-text administrative labels; `category` is the Indian Railways
/// station tier (A1, A, B, C, D, E, F).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Station code, the unique lookup key.
    pub code: String,

    /// Short display name (e.g. "New Delhi").
    pub name: String,

    /// Full official name (e.g. "New Delhi Railway Station").
    pub full_name: String,

    /// Railway zone (e.g. "Northern Railway").
    pub zone: String,

    /// State the station is in.
    pub state: String,

    /// Station tier label.
    pub category: String,

    /// Number of platforms.
    #[serde(default)]
    pub platforms: u32,

    /// Transport-mode labels for onward connectivity ("Metro", "Bus", ...).
    #[serde(default)]
    pub connectivity: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_document() {
        let json = r#"{
            "code": "NDLS",
            "name": "New Delhi",
            "fullName": "New Delhi Railway Station",
            "zone": "Northern Railway",
            "state": "Delhi",
            "category": "A1",
            "platforms": 16,
            "connectivity": ["Metro", "Bus", "Airport"]
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.code, "NDLS");
        assert_eq!(station.name, "New Delhi");
        assert_eq!(station.full_name, "New Delhi Railway Station");
        assert_eq!(station.zone, "Northern Railway");
        assert_eq!(station.category, "A1");
        assert_eq!(station.platforms, 16);
        assert_eq!(station.connectivity.len(), 3);
    }

    #[test]
    fn connectivity_defaults_when_absent() {
        let json = r#"{
            "code": "BCT",
            "name": "Mumbai Central",
            "fullName": "Mumbai Central Railway Station",
            "zone": "Western Railway",
            "state": "Maharashtra",
            "category": "A1"
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert!(station.connectivity.is_empty());
        assert_eq!(station.platforms, 0);
    }
}
