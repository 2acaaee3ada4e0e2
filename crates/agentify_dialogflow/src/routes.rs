// --- File: crates/agentify_dialogflow/src/routes.rs ---

use crate::handlers::{handle_dialogflow_webhook, DialogflowState};

use agentify_config::AppConfig;
use axum::{routing::post, Router};
use std::sync::Arc;
use tracing::info;

/// Creates a router containing all routes for the fulfillment service.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let handler_state = Arc::new(DialogflowState { config });

    info!("💡 Dialogflow: Adding /fulfillment route.");
    Router::new()
        .route("/fulfillment", post(handle_dialogflow_webhook))
        .with_state(handler_state)
}
