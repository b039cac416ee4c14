//! Web layer for the rail information service.
//!
//! JSON-only HTTP endpoints over the entity lookup, directory search, and
//! PNR-status proxy. Page rendering and SEO tooling live in the site
//! frontend, not here.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
