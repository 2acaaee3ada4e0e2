// --- File: crates/agentify_dialogflow/src/lib.rs ---

// Declare modules within this crate
pub mod actions;   // Closed mapping from action names to handlers
pub mod assistant; // Google Assistant response surface (tell/ask, rich responses)
pub mod github;    // Outbound GitHub user lookup
pub mod handlers;  // Axum handlers for the webhook endpoint
pub mod logic;     // Intent dispatch and channel formatting
pub mod models;    // Dialogflow v1 request/response envelope
pub mod routes;    // Axum router definition for this crate
#[cfg(feature = "openapi")]
pub mod doc;
// OpenAPI documentation specific to the fulfillment API

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export state if main.rs needs to construct it
pub use handlers::DialogflowState;
