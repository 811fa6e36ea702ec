//! GoalGrocer JSON API: storefront plus `/admin` back-office.
//!
//! The serving model is memory-first: the whole catalogue is loaded from the
//! external document store at startup and every request is answered from
//! memory, with writes mirrored back to the store in the background.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, Result};
pub use state::AppState;
