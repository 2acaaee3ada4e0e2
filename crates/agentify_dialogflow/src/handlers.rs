// --- File: crates/agentify_dialogflow/src/handlers.rs ---

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use agentify_config::AppConfig;

use crate::actions::Action;
use crate::logic::{dispatch_response, run_action, FulfillmentReply};
use crate::models::QueryResult;

// Fixed 400 bodies for the two rejected envelope shapes.
pub const INVALID_WEBHOOK_REQUEST_MSG: &str =
    "Invalid Webhook Request (expecting v1 or v2 webhook request)";
pub const V2_NOT_SUPPORTED_MSG: &str = "Invalid Webhook Request (v2 not supported)";

// --- State for the Dialogflow Handler ---
#[derive(Clone)]
pub struct DialogflowState {
    pub config: Arc<AppConfig>,
}

// --- Handler for the Fulfillment Webhook ---
//
// Envelope rules:
//   * `result` present        -> v1, processed
//   * `queryResult` present   -> v2, rejected with 400
//   * neither                 -> rejected with 400
// Past validation the call always answers 200; handler failures are
// absorbed into conversational replies.
#[axum::debug_handler]
pub async fn handle_dialogflow_webhook(
    State(state): State<Arc<DialogflowState>>,
    Json(body): Json<Value>,
) -> Result<Json<FulfillmentReply>, (StatusCode, String)> {
    debug!("[Dialogflow Handler] Request body: {}", body);

    if let Some(result) = body.get("result") {
        let result: QueryResult = serde_json::from_value(result.clone()).map_err(|err| {
            warn!("[Dialogflow Handler] Unreadable v1 result: {}", err);
            (
                StatusCode::BAD_REQUEST,
                INVALID_WEBHOOK_REQUEST_MSG.to_string(),
            )
        })?;

        let request_source = body
            .get("originalRequest")
            .and_then(|original| original.get("source"))
            .and_then(Value::as_str);

        let action = Action::resolve(result.action.as_deref());
        let response = run_action(&state.config.github, action, &result.parameters).await;
        let reply = dispatch_response(request_source, response);
        debug!("[Dialogflow Handler] Response to Dialogflow: {:?}", reply);
        Ok(Json(reply))
    } else if body.get("queryResult").is_some() {
        warn!("[Dialogflow Handler] Rejecting v2 webhook request");
        Err((StatusCode::BAD_REQUEST, V2_NOT_SUPPORTED_MSG.to_string()))
    } else {
        warn!("[Dialogflow Handler] Invalid request");
        Err((
            StatusCode::BAD_REQUEST,
            INVALID_WEBHOOK_REQUEST_MSG.to_string(),
        ))
    }
}
