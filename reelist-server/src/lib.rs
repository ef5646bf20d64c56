//! HTTP surface of the Reelist catalog addon.
//!
//! Everything with decision logic lives in `reelist-core`; this crate is
//! the plumbing around it: configuration, the JSON loader, the manifest
//! declaration, and the axum routes that adapt catalog requests onto the
//! query engine.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod manifest;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
