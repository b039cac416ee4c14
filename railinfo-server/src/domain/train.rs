//! Train record.

use serde::{Deserialize, Serialize};

/// A train in the directory.
///
/// Fields mirror the on-disk JSON documents one-to-one. Schedule fields
/// (`departure_time`, `duration`, `distance`, ...) are display strings, not
/// structured values. The `source_code`/`destination_code` references are
/// informal: they may name stations with no local record, and callers render
/// the raw code in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    /// 5-digit train number, the unique lookup key.
    pub number: String,

    /// Human-readable train name (e.g. "Mumbai Rajdhani").
    pub name: String,

    /// Category label: "Rajdhani", "Shatabdi", "Superfast", "Express", ...
    #[serde(rename = "type")]
    pub train_type: String,

    /// Origin station name.
    pub source: String,

    /// Origin station code.
    pub source_code: String,

    /// Terminus station name.
    pub destination: String,

    /// Terminus station code.
    pub destination_code: String,

    /// Departure time from origin, display string (e.g. "16:35").
    pub departure_time: String,

    /// Arrival time at terminus, display string.
    pub arrival_time: String,

    /// Journey duration, display string (e.g. "15h 40m").
    pub duration: String,

    /// Journey distance, display string (e.g. "1384 km").
    pub distance: String,

    /// Weekday labels the train runs on.
    #[serde(default)]
    pub running_days: Vec<String>,

    /// Travel-class labels (e.g. "1A", "2A", "3A", "SL").
    #[serde(default)]
    pub classes: Vec<String>,

    /// Number of intermediate stops.
    #[serde(default)]
    pub stops: u32,

    /// Ordered names of the major stops.
    #[serde(default)]
    pub major_stops: Vec<String>,

    /// Frequency label (e.g. "Daily", "Weekly").
    pub frequency: String,
}
