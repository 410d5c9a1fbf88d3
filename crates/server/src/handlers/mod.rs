//! # Route Handlers
//!
//! This module aggregates the Axum handlers for the `powercast-server`.

pub mod ask;
pub mod general;

pub use ask::ask_handler;
pub use general::{health_check, root};

pub use crate::{errors::AppError, state::AppState};
