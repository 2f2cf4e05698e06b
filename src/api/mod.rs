//! HTTP API module for the fee schedule engine.
//!
//! This module provides the REST endpoint that accepts a calculation
//! envelope and responds with the rendered compliance document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DocumentRequest;
pub use response::ApiError;
pub use state::AppState;
