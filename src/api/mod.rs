//! HTTP API: routing, request handling and shared state

pub mod error;
pub mod handler;
pub mod router;
pub mod state;

// Re-export the entry points for the binary
pub use router::router;
pub use state::AppState;
