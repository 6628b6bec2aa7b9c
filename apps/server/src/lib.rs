//! CMHub server library: router construction, state wiring, configuration.
//!
//! Exposed as a library so integration tests can build the full router
//! without binding a socket.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
