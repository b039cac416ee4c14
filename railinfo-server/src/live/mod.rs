//! Third-party live-train API integration.
//!
//! The live service is consulted only as a fallback when a train number is
//! absent from the local store. Key characteristics:
//! - one outbound request per lookup, bounded by a short fixed timeout
//! - the credential travels in a header and is supplied at construction
//! - results are mapped into the local `Train` shape with fixed defaults
//!   for absent fields, and are never written back to the store

mod client;
mod convert;
mod error;
mod resolver;
mod types;

pub use client::{LiveApiClient, LiveApiConfig};
pub use convert::train_from_remote;
pub use error::LiveApiError;
pub use resolver::{LiveLookup, TrainResolver};
pub use types::RemoteTrain;
