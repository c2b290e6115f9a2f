//! Wire types exchanged with the agent-orchestration service.
//!
//! One request/response pair per round. The request carries the disclosure
//! snapshot for the current round; the response carries the agents' turns as
//! optional text and base64-encoded audio fields, any subset of which may be
//! absent.

use crate::disclosure::{DisclosureSnapshot, disclose};
use crate::material::ReferenceMaterial;
use crate::session::Session;
use serde::{Deserialize, Serialize};

/// The JSON body POSTed to the orchestration service for one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub user_name: String,
    pub round: u32,
    pub user_input: String,
    pub topic: String,
    pub session_id: String,
    pub content: DisclosureSnapshot,
}

impl TurnRequest {
    /// Assembles the request for the session's current round.
    ///
    /// The user input is trimmed here so the wire never carries surrounding
    /// whitespace, and the content slice is computed by the disclosure policy
    /// from the round index alone.
    pub fn build(session: &Session, material: &ReferenceMaterial, user_text: &str) -> Self {
        Self {
            user_name: session.wire_user_name().to_string(),
            round: session.round,
            user_input: user_text.trim().to_string(),
            topic: material.title.clone(),
            session_id: session.wire_session_id().to_string(),
            content: disclose(material, session.round),
        }
    }
}

/// One round's reply from the orchestration service.
///
/// Every field is optional: a missing text field simply contributes no
/// transcript entry, and a missing voice field contributes no narration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    #[serde(rename = "agentA_message", skip_serializing_if = "Option::is_none")]
    pub agent_a_message: Option<String>,
    #[serde(rename = "agentB_message", skip_serializing_if = "Option::is_none")]
    pub agent_b_message: Option<String>,
    /// Base64-encoded audio clip for Agent A's narration.
    #[serde(rename = "agentA_voice", skip_serializing_if = "Option::is_none")]
    pub agent_a_voice: Option<String>,
    /// Base64-encoded audio clip for Agent B's narration.
    #[serde(rename = "agentB_voice", skip_serializing_if = "Option::is_none")]
    pub agent_b_voice: Option<String>,
    #[serde(rename = "session_id", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}
