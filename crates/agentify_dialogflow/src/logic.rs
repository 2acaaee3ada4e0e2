// --- File: crates/agentify_dialogflow/src/logic.rs ---
//! Intent dispatch and channel formatting.
//!
//! Handlers produce a [`ResponseToUser`]; a single dispatch step then picks
//! the wire format from the originating channel. Nothing in here can fail:
//! the only fallible operation (the GitHub lookup) is absorbed into an
//! apology response by the default handler.

use serde::Serialize;
use std::collections::HashMap;
use tracing::error;

use agentify_config::GithubConfig;

use crate::actions::Action;
use crate::assistant::{self, AssistantResponse, RichResponse};
use crate::github::fetch_github_user;
use crate::models::{
    ResponseToUser, StructuredResponse, WebhookResponse, GOOGLE_ASSISTANT_SOURCE,
};

// Fixed reply strings.
pub const WELCOME_TEXT: &str = "Hello, Welcome to my Dialogflow agent!";
pub const FALLBACK_TEXT: &str = "I'm having trouble, can you try that again?";
pub const GITHUB_APOLOGY_TEXT: &str =
    "I'm really sorry, something went wrong while fetching information from Git Hub";

/// Parameter key the default handler reads the username from.
pub const GITHUB_USERNAME_PARAM: &str = "githubusername";

// --- Action Handlers ---

/// Runs the handler bound to `action`.
pub async fn run_action(
    github: &GithubConfig,
    action: Action,
    parameters: &HashMap<String, String>,
) -> ResponseToUser {
    match action {
        Action::Welcome => ResponseToUser::PlainText(WELCOME_TEXT.to_string()),
        Action::Fallback => ResponseToUser::PlainText(FALLBACK_TEXT.to_string()),
        Action::Default => github_followers_response(github, parameters).await,
    }
}

/// Default handler: one GitHub lookup, one sentence about the follower
/// count. Any failure becomes the apology string; the webhook call itself
/// still succeeds.
async fn github_followers_response(
    github: &GithubConfig,
    parameters: &HashMap<String, String>,
) -> ResponseToUser {
    let username = parameters
        .get(GITHUB_USERNAME_PARAM)
        .map(String::as_str)
        .unwrap_or_default();

    let text = match fetch_github_user(github, username).await {
        Ok(user) => format!("You have {} followers on Git Hub", user.followers),
        Err(err) => {
            error!("[Dialogflow Logic] GitHub lookup failed: {}", err);
            GITHUB_APOLOGY_TEXT.to_string()
        }
    };

    ResponseToUser::Structured(StructuredResponse {
        speech: Some(text.clone()),
        display_text: Some(text),
        ..Default::default()
    })
}

// --- Channel Dispatch ---

/// One of the two wire formats, chosen by [`dispatch_response`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FulfillmentReply {
    Assistant(AssistantResponse),
    Generic(WebhookResponse),
}

/// The single formatting fork every handler output passes through.
pub fn dispatch_response(request_source: Option<&str>, response: ResponseToUser) -> FulfillmentReply {
    if request_source == Some(GOOGLE_ASSISTANT_SOURCE) {
        FulfillmentReply::Assistant(format_assistant_response(response))
    } else {
        FulfillmentReply::Generic(format_generic_response(response))
    }
}

/// Formats a handler output for the generic text/speech channel.
pub fn format_generic_response(response: ResponseToUser) -> WebhookResponse {
    match response {
        ResponseToUser::PlainText(text) => WebhookResponse {
            speech: text.clone(),
            display_text: text,
            data: None,
            context_out: None,
        },
        ResponseToUser::Structured(body) => WebhookResponse {
            speech: first_non_empty(&body.speech, &body.display_text),
            display_text: first_non_empty(&body.display_text, &body.speech),
            data: body.data,
            context_out: body.output_contexts,
        },
    }
}

/// Formats a handler output for the Google Assistant channel.
///
/// A plain string closes the session; a structured response keeps it open,
/// carrying either the rich response assembled here or a pre-built override.
pub fn format_assistant_response(response: ResponseToUser) -> AssistantResponse {
    match response {
        ResponseToUser::PlainText(text) => assistant::tell(text),
        ResponseToUser::Structured(body) => {
            let speech = first_non_empty(&body.speech, &body.display_text);
            let display_text = first_non_empty(&body.display_text, &body.speech);
            let built = RichResponse::new().add_simple_response(speech, Some(display_text));
            let rich = body.google_rich_response.unwrap_or(built);
            assistant::ask(rich, body.google_output_contexts)
        }
    }
}

/// First-non-empty-wins fallback between `speech` and `display_text`.
/// An empty string counts as absent.
fn first_non_empty(primary: &Option<String>, secondary: &Option<String>) -> String {
    primary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| secondary.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}
