//! Core domain types for the rail directory.
//!
//! Keys (`TrainNumber`, `StationCode`) are valid by construction; the
//! records (`Train`, `Station`) mirror the on-disk JSON documents.

mod station;
mod station_code;
mod train;
mod train_number;

pub use station::Station;
pub use station_code::{InvalidStationCode, StationCode};
pub use train::Train;
pub use train_number::{InvalidTrainNumber, TrainNumber};
