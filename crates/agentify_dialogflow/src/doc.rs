// --- File: crates/agentify_dialogflow/src/doc.rs ---

// Only compile this module if the 'openapi' feature is enabled
#![cfg(feature = "openapi")]
// Allow dead code for the dummy functions used by utoipa macros
#![allow(dead_code)]

use utoipa::OpenApi;
// The generic-channel response schema; the Assistant-channel variant shares
// the same envelope with an additional `data.google` payload.
use crate::models::WebhookResponse;

// --- Dummy function for the Fulfillment Webhook Endpoint ---
#[utoipa::path(
    post,
    path = "/fulfillment", // Path relative to where this router is nested (e.g., /api)
    request_body(
        description = "Dialogflow v1 webhook request. The `result` object carries the \
                       matched action and parameters; `originalRequest.source` identifies \
                       the originating channel.",
        content = serde_json::Value,
        example = json!({
            "result": {
                "action": "input.welcome",
                "parameters": {},
                "contexts": []
            },
            "originalRequest": { "source": "google" }
        })
    ),
    responses(
        (status = 200, description = "Formatted fulfillment reply", body = WebhookResponse, example = json!({
            "speech": "Hello, Welcome to my Dialogflow agent!",
            "displayText": "Hello, Welcome to my Dialogflow agent!"
        })),
        (status = 400, description = "Malformed webhook body", body = String, examples(
            ("UnknownFormat" = (
                summary = "Neither v1 nor v2 marker field present",
                value = json!("Invalid Webhook Request (expecting v1 or v2 webhook request)")
            )),
            ("V2Unsupported" = (
                summary = "v2 request received",
                value = json!("Invalid Webhook Request (v2 not supported)")
            ))
        ))
    ),
    tag = "Dialogflow"
)]
fn doc_handle_dialogflow_webhook() {
    // This function body is never executed.
}

// --- Main OpenAPI Definition for the Fulfillment Service ---
#[derive(OpenApi)]
#[openapi(
    paths(doc_handle_dialogflow_webhook),
    components(schemas(WebhookResponse)),
    tags(
        (name = "Dialogflow", description = "Dialogflow webhook fulfillment API")
    )
    // No 'servers' needed here, as this will be merged into the main backend's ApiDoc
)]
pub struct DialogflowApiDoc;
