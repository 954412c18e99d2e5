//! The conversational profile-accumulation protocol.
//!
//! Each turn is exactly one external call: the prior profile and the latest
//! user message go in, a strict three-key envelope `{reply, profile, action}`
//! comes back. The processor never trusts the model's shape: the profile is
//! structurally validated, then defensively merged onto the prior profile so
//! an accepted turn can never erase known information; the action is
//! normalized to the closed set; the reply is flattened to a single line.
//!
//! A turn that cannot be parsed fails with `MalformedGenerationOutput`
//! carrying the raw text — the caller-held prior profile is untouched and no
//! partial update is ever returned.

pub mod action;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::profile::StudentProfile;

pub use self::action::{route, ChatAction, Directive};

use self::prompts::TURN_SYSTEM;

/// Result of one chat exchange. Ephemeral; the caller keeps `profile` and
/// sends it back on the next turn.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurnResult {
    /// Single-line assistant reply (embedded line breaks flattened to spaces).
    pub reply: String,
    /// The full updated profile, superset-or-equal of the prior one except
    /// where the user supplied a correcting value.
    pub profile: StudentProfile,
    pub action: ChatAction,
}

/// The model's envelope. Exactly three keys are expected; extra keys are
/// ignored, and the original wire names (`assistant_reply`, `user_profile`)
/// are accepted as aliases. `action` is normalized separately so an unknown
/// label degrades to `none` instead of failing the turn.
#[derive(Debug, Deserialize)]
struct RawTurnEnvelope {
    #[serde(alias = "assistant_reply")]
    reply: String,
    #[serde(alias = "user_profile")]
    profile: serde_json::Value,
    #[serde(default)]
    action: Option<String>,
}

/// Processes one conversation turn. `prior` is either the empty default or a
/// previously returned profile; `message` must be non-empty user text.
pub async fn process_turn(
    generator: &dyn TextGenerator,
    prior: &StudentProfile,
    message: &str,
) -> Result<ConversationTurnResult, AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let payload = build_payload(prior, message)?;

    let text = generator.generate(TURN_SYSTEM, &payload).await.map_err(|e| {
        if e.is_transport() {
            AppError::TransportUnavailable(e.to_string())
        } else {
            AppError::MalformedGenerationOutput { raw: e.to_string() }
        }
    })?;

    let envelope: RawTurnEnvelope = serde_json::from_str(strip_json_fences(&text))
        .map_err(|_| AppError::MalformedGenerationOutput { raw: text.clone() })?;

    // Structural validation of the returned profile against the schema.
    let candidate: StudentProfile = serde_json::from_value(envelope.profile)
        .map_err(|_| AppError::MalformedGenerationOutput { raw: text.clone() })?;

    let profile = prior.merged_with(candidate);
    let action = match envelope.action.as_deref() {
        Some(raw) => ChatAction::normalize(raw),
        None => ChatAction::None,
    };

    Ok(ConversationTurnResult {
        reply: flatten_reply(&envelope.reply),
        profile,
        action,
    })
}

/// Builds the user-message payload: serialized prior profile plus the latest
/// message, in the layout the system prompt documents.
fn build_payload(profile: &StudentProfile, message: &str) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile).map_err(anyhow::Error::from)?;
    Ok(format!(
        "USER_PROFILE:\n{profile_json}\n\nUSER_MESSAGE:\n{message}\n"
    ))
}

/// Flattens embedded line breaks (and runs of whitespace) to single spaces.
/// This is the documented single-line policy: replies are flattened, never
/// rejected.
fn flatten_reply(reply: &str) -> String {
    reply.split_whitespace().collect::<Vec<_>>().join(" ")
}
