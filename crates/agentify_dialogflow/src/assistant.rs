// --- File: crates/agentify_dialogflow/src/assistant.rs ---
//! Typed model of the Actions-on-Google response surface used by the
//! fulfillment logic: simple/rich responses, session contexts, and the two
//! terminal calls (`tell` closes the session, `ask` keeps it open).
//!
//! Dialogflow forwards the `data.google` payload to the Assistant verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single spoken-and-displayed element of a rich response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RichResponseItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_response: Option<SimpleResponse>,
}

/// A structured, multi-element Assistant reply.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RichResponse {
    pub items: Vec<RichResponseItem>,
}

impl RichResponse {
    pub fn new() -> Self {
        RichResponse { items: Vec::new() }
    }

    /// Appends a simple response element, builder style.
    pub fn add_simple_response(
        mut self,
        speech: impl Into<String>,
        display_text: Option<String>,
    ) -> Self {
        self.items.push(RichResponseItem {
            simple_response: Some(SimpleResponse {
                text_to_speech: speech.into(),
                display_text,
            }),
        });
        self
    }

    /// Speech of the first simple response, used for the top-level `speech`
    /// field of the envelope.
    fn first_speech(&self) -> Option<&str> {
        self.items
            .iter()
            .find_map(|item| item.simple_response.as_ref())
            .map(|simple| simple.text_to_speech.as_str())
    }
}

/// A session context applied before replying (name, lifespan, parameters).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssistantContext {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// The `data.google` payload of an Assistant-channel webhook response.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayload {
    pub expect_user_response: bool,
    pub is_ssml: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_response: Option<RichResponse>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GoogleData {
    pub google: GooglePayload,
}

/// Full webhook response body for the Assistant channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    pub speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    pub data: GoogleData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_out: Option<Vec<AssistantContext>>,
}

/// Closes the session with a final spoken string.
pub fn tell(speech: impl Into<String>) -> AssistantResponse {
    let speech = speech.into();
    AssistantResponse {
        speech,
        display_text: None,
        data: GoogleData {
            google: GooglePayload {
                expect_user_response: false,
                is_ssml: false,
                rich_response: None,
            },
        },
        context_out: None,
    }
}

/// Keeps the session open and replies with a rich response.
///
/// `contexts` are applied to the session by emitting them in `contextOut`.
pub fn ask(
    rich_response: RichResponse,
    contexts: Option<Vec<AssistantContext>>,
) -> AssistantResponse {
    let speech = rich_response.first_speech().unwrap_or_default().to_string();
    AssistantResponse {
        speech,
        display_text: None,
        data: GoogleData {
            google: GooglePayload {
                expect_user_response: true,
                is_ssml: false,
                rich_response: Some(rich_response),
            },
        },
        context_out: contexts,
    }
}
