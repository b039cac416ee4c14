//! Mapping from the live-train API shape to the local `Train` record.

use crate::domain::{Train, TrainNumber};

use super::types::RemoteTrain;

/// Class list used when the live API does not report classes.
const DEFAULT_CLASSES: [&str; 4] = ["SL", "3A", "2A", "1A"];

/// Category label used when the live API does not report one.
const DEFAULT_TYPE: &str = "Express";

/// Frequency label used when the live API does not report one.
const DEFAULT_FREQUENCY: &str = "Daily";

/// Map a remote train description into the local record shape.
///
/// Returns `None` when the response carries no `trainName`: such a payload
/// identifies nothing and is indistinguishable from "train unknown". Every
/// other absent field gets a fixed default, so the result is always a
/// complete record, never a partial one. The record's `number` is the
/// requested number, not anything the remote side claims.
pub fn train_from_remote(number: &TrainNumber, remote: RemoteTrain) -> Option<Train> {
    let name = remote.train_name?;

    Some(Train {
        number: number.as_str().to_string(),
        name,
        train_type: remote.train_type.unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        source: remote.source.unwrap_or_default(),
        source_code: remote.source_code.unwrap_or_default(),
        destination: remote.destination.unwrap_or_default(),
        destination_code: remote.destination_code.unwrap_or_default(),
        departure_time: remote.departure_time.unwrap_or_default(),
        arrival_time: remote.arrival_time.unwrap_or_default(),
        duration: remote.duration.unwrap_or_default(),
        distance: remote.distance.unwrap_or_default(),
        running_days: remote.running_days.unwrap_or_default(),
        classes: remote
            .classes
            .unwrap_or_else(|| DEFAULT_CLASSES.iter().map(|s| s.to_string()).collect()),
        stops: remote.stops.unwrap_or(0),
        major_stops: remote.major_stops.unwrap_or_default(),
        frequency: remote
            .frequency
            .unwrap_or_else(|| DEFAULT_FREQUENCY.to_string()),
    })
}
