//! Match scoring — one-shot transformation from (student, scholarship,
//! analysis) to a `StudentScholarshipMatch` via a single LLM call.
//!
//! The 0-100 rubric bands are scoring guidance for the model, not an
//! enforced invariant; out-of-range output is clamped defensively here.

pub mod prompts;

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::entities::{Scholarship, ScholarshipAnalysis, Student, StudentScholarshipMatch};

use self::prompts::{MATCH_PROMPT_TEMPLATE, MATCH_SYSTEM};

/// Model output shape. Ids are taken from the inputs, never from the model.
#[derive(Debug, Deserialize)]
struct RawMatch {
    match_score: i64,
    top_reasons: Vec<String>,
}

/// Scores one student against one scholarship. `top_reasons` is passed
/// through after type validation — never padded or truncated.
pub async fn match_student_scholarship(
    generator: &dyn TextGenerator,
    student: &Student,
    scholarship: &Scholarship,
    analysis: &ScholarshipAnalysis,
) -> Result<StudentScholarshipMatch, AppError> {
    let prompt = MATCH_PROMPT_TEMPLATE
        .replace(
            "{student_json}",
            &serde_json::to_string_pretty(student).map_err(anyhow::Error::from)?,
        )
        .replace(
            "{scholarship_json}",
            &serde_json::to_string_pretty(scholarship).map_err(anyhow::Error::from)?,
        )
        .replace(
            "{analysis_json}",
            &serde_json::to_string_pretty(analysis).map_err(anyhow::Error::from)?,
        );

    let text = generator.generate(MATCH_SYSTEM, &prompt).await.map_err(|e| {
        if e.is_transport() {
            AppError::TransportUnavailable(e.to_string())
        } else {
            AppError::MatchGenerationFailed(e.to_string())
        }
    })?;

    let raw: RawMatch = serde_json::from_str(strip_json_fences(&text))
        .map_err(|e| AppError::MatchGenerationFailed(format!("unparseable match: {e}")))?;

    if raw.top_reasons.is_empty() {
        return Err(AppError::MatchGenerationFailed(
            "top_reasons is empty".to_string(),
        ));
    }

    let match_score = clamp_score(raw.match_score);

    info!(
        "Matched student {} against scholarship {}: score {}",
        student.id, scholarship.id, match_score
    );

    Ok(StudentScholarshipMatch {
        student_id: student.id.clone(),
        scholarship_id: scholarship.id.clone(),
        match_score,
        top_reasons: raw.top_reasons,
    })
}

/// Clamps a model-supplied score into [0, 100], logging when it had to.
fn clamp_score(score: i64) -> u8 {
    if !(0..=100).contains(&score) {
        warn!("Match score {score} out of range, clamping to [0, 100]");
    }
    score.clamp(0, 100) as u8
}
