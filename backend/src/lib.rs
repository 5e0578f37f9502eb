//! Category Service Library
//!
//! In-memory category CRUD over HTTP. Exposes the router and state so the
//! binary and the integration tests build the same application.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
/// Application state management
///
/// Handles the category model and the shared collection.
pub mod state;
