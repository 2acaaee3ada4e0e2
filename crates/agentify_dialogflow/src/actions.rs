// --- File: crates/agentify_dialogflow/src/actions.rs ---

/// Action name Dialogflow sends when the default welcome intent matches.
pub const WELCOME_ACTION: &str = "input.welcome";
/// Action name Dialogflow sends when the default fallback intent matches.
pub const FALLBACK_ACTION: &str = "input.unknown";

/// The closed set of actions this agent fulfills.
///
/// `Default` is the reserved catch-all slot: every name outside the table,
/// including an empty or missing one, resolves to it. Resolution can never
/// fail and no handler is ever looked up by an unbound key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Welcome,
    Fallback,
    Default,
}

impl Action {
    pub fn resolve(name: Option<&str>) -> Action {
        match name {
            Some(WELCOME_ACTION) => Action::Welcome,
            Some(FALLBACK_ACTION) => Action::Fallback,
            _ => Action::Default,
        }
    }
}
