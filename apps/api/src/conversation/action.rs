//! The turn's next-action signal and the pure router that maps it to a
//! caller-facing directive. The router trusts the signal — enforcement of
//! "only after the user said they are ready" lives in the prompt contract.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Closed set of next-action signals a turn can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    #[default]
    None,
    SearchScholarships,
    GenerateEssay,
}

impl ChatAction {
    /// Maps a wire string onto the closed set. Anything unrecognized is
    /// normalized to `None` (logged), never an error.
    pub fn normalize(raw: &str) -> ChatAction {
        match raw.trim() {
            "none" => ChatAction::None,
            "search_scholarships" => ChatAction::SearchScholarships,
            "generate_essay" => ChatAction::GenerateEssay,
            other => {
                warn!("Unrecognized chat action '{other}', normalizing to none");
                ChatAction::None
            }
        }
    }
}

/// What the caller should do next. The service performs neither the search
/// nor the essay generation here; it only signals readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    ContinueConversation,
    BeginScholarshipSearch,
    BeginEssayGeneration,
}

/// Pure mapping from action signal to directive.
pub fn route(action: ChatAction) -> Directive {
    match action {
        ChatAction::None => Directive::ContinueConversation,
        ChatAction::SearchScholarships => Directive::BeginScholarshipSearch,
        ChatAction::GenerateEssay => Directive::BeginEssayGeneration,
    }
}
