//! Web layer for the bus route planner.
//!
//! Provides HTTP endpoints for route search, live buses and tourist spots.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
