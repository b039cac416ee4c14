//! Live-train API response DTOs.
//!
//! This is the single documented response shape for a train lookup. The
//! upstream service omits fields rather than sending null, so everything
//! is `Option`; a response without `trainName` carries no usable record
//! and is treated as "train unknown remotely".

use serde::Deserialize;

/// A train as described by the live-data API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTrain {
    /// Human-readable train name. The only field the mapping requires.
    pub train_name: Option<String>,

    /// Category label, if the service knows it.
    pub train_type: Option<String>,

    /// Origin station name.
    pub source: Option<String>,

    /// Origin station code.
    pub source_code: Option<String>,

    /// Terminus station name.
    pub destination: Option<String>,

    /// Terminus station code.
    pub destination_code: Option<String>,

    /// Departure time from origin ("HH:MM" display string).
    pub departure_time: Option<String>,

    /// Arrival time at terminus.
    pub arrival_time: Option<String>,

    /// Journey duration display string.
    pub duration: Option<String>,

    /// Journey distance display string.
    pub distance: Option<String>,

    /// Weekday labels the train runs on.
    pub running_days: Option<Vec<String>>,

    /// Travel-class labels.
    pub classes: Option<Vec<String>>,

    /// Intermediate stop count.
    pub stops: Option<u32>,

    /// Ordered major stop names.
    pub major_stops: Option<Vec<String>>,

    /// Frequency label.
    pub frequency: Option<String>,
}
