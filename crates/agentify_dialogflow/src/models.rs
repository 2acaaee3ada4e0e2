// --- File: crates/agentify_dialogflow/src/models.rs ---

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::assistant::{AssistantContext, RichResponse};

/// `originalRequest.source` value Dialogflow sets for Google Assistant traffic.
pub const GOOGLE_ASSISTANT_SOURCE: &str = "google";

// --- Inbound Envelope (Dialogflow v1) ---

/// The part of the v1 `result` object this service consumes.
///
/// Everything defaults so that a sparse result (no action, no parameters)
/// still extracts cleanly; action resolution treats missing names the same
/// as unknown ones.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct QueryResult {
    #[serde(default)]
    pub action: Option<String>,
    /// Opaque key-value pairs filled in by the agent's intent matching.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    /// Session contexts active for this turn. Passed through, never inspected.
    #[serde(default)]
    pub contexts: Vec<Value>,
}

/// The `originalRequest` wrapper carrying the originating channel marker.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OriginalRequest {
    #[serde(default)]
    pub source: Option<String>,
}

// --- Handler Output ---

/// What an action handler produces before channel formatting.
///
/// Either a bare string or a structured record; both formatting branches
/// match on it exhaustively.
#[derive(Debug, Clone)]
pub enum ResponseToUser {
    PlainText(String),
    Structured(StructuredResponse),
}

/// Structured handler output. At most one of `speech` / `display_text`
/// should be absent; formatting fills the gap from the other.
#[derive(Debug, Clone, Default)]
pub struct StructuredResponse {
    pub speech: Option<String>,
    pub display_text: Option<String>,
    /// Opaque rich-message payload passed through on the generic channel.
    pub data: Option<Value>,
    /// Contexts emitted on the generic channel (`contextOut`).
    pub output_contexts: Option<Vec<Value>>,
    /// Pre-built Assistant rich response; replaces the one assembled from
    /// `speech` / `display_text` on the Assistant channel.
    pub google_rich_response: Option<RichResponse>,
    /// Contexts applied to the Assistant session before replying.
    pub google_output_contexts: Option<Vec<AssistantContext>>,
}

// --- Outbound Envelope (generic channel) ---

/// Dialogflow v1 webhook response for the generic text/speech channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Hello, Welcome to my Dialogflow agent!"))]
    pub speech: String,
    #[cfg_attr(feature = "openapi", schema(example = "Hello, Welcome to my Dialogflow agent!"))]
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub context_out: Option<Vec<Value>>,
}
