//! Rail information service.
//!
//! Serves Train and Station records from a read-only directory of per-key
//! JSON documents, falling back to a third-party live-train API for train
//! numbers missing locally.

pub mod cache;
pub mod directory;
pub mod domain;
pub mod live;
pub mod pnr;
pub mod service;
pub mod store;
pub mod web;
