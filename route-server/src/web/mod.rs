//! Web layer for the route optimizer.
//!
//! Provides JSON endpoints for browsing the network and finding routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
