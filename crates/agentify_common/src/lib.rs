// --- File: crates/agentify_common/src/lib.rs ---

// Declare modules within this crate
pub mod http;    // HTTP utilities (shared outbound client)
pub mod logging; // Logging utilities

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, get, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
