//! Read-only entity storage.
//!
//! Entities are one-JSON-document-per-key files seeded out of band. The
//! store resolves a key to a record or "absent"; nothing at runtime ever
//! writes to it.

mod fs;

pub use fs::FsStore;
