//! Axum route handlers. Thin wrappers: parse, validate emptiness where it is
//! cheap, delegate to the engine, serialize. All error mapping lives in
//! `AppError::into_response`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::analyze_scholarship;
use crate::conversation::{self, ChatAction, Directive};
use crate::errors::AppError;
use crate::essay::{generate_general_essay, generate_specific_essay};
use crate::matching::match_student_scholarship;
use crate::models::entities::{
    Scholarship, ScholarshipAnalysis, Student, StudentScholarshipMatch,
};
use crate::models::profile::StudentProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub student: Student,
    pub scholarship: Scholarship,
    pub analysis: ScholarshipAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct SpecificEssayRequest {
    pub student: Student,
    pub scholarship: Scholarship,
    pub analysis: ScholarshipAnalysis,
    #[serde(rename = "match")]
    pub student_match: StudentScholarshipMatch,
}

#[derive(Debug, Serialize)]
pub struct EssayResponse {
    pub essay: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Absent profile means the conversation starts from the empty default.
    #[serde(default)]
    pub profile: StudentProfile,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub profile: StudentProfile,
    pub action: ChatAction,
    /// What the caller should do next, per the action router.
    pub directive: Directive,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Analyzes a complete scholarship's priorities into a weight/tone profile.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(scholarship): Json<Scholarship>,
) -> Result<Json<ScholarshipAnalysis>, AppError> {
    let analysis = analyze_scholarship(state.generator.as_ref(), &scholarship).await?;
    Ok(Json(analysis))
}

/// POST /api/match
///
/// Scores one student against one scholarship, guided by its analysis.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<StudentScholarshipMatch>, AppError> {
    let result = match_student_scholarship(
        state.generator.as_ref(),
        &request.student,
        &request.scholarship,
        &request.analysis,
    )
    .await?;
    Ok(Json(result))
}

/// POST /api/essay/general
///
/// Generates a general personal statement from the student entity alone.
pub async fn handle_general_essay(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> Result<Json<EssayResponse>, AppError> {
    let essay = generate_general_essay(state.generator.as_ref(), &student).await?;
    Ok(Json(EssayResponse { essay }))
}

/// POST /api/essay/specific
///
/// Generates an essay tailored to one scholarship, using the full derived
/// context (analysis + match).
pub async fn handle_specific_essay(
    State(state): State<AppState>,
    Json(request): Json<SpecificEssayRequest>,
) -> Result<Json<EssayResponse>, AppError> {
    let essay = generate_specific_essay(
        state.generator.as_ref(),
        &request.student,
        &request.scholarship,
        &request.analysis,
        &request.student_match,
    )
    .await?;
    Ok(Json(EssayResponse { essay }))
}

/// POST /api/chat
///
/// Processes one profile-building conversation turn. The caller owns the
/// profile between requests; nothing is stored server-side.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let result =
        conversation::process_turn(state.generator.as_ref(), &request.profile, &request.message)
            .await?;
    let directive = conversation::route(result.action);

    Ok(Json(ChatResponse {
        reply: result.reply,
        profile: result.profile,
        action: result.action,
        directive,
    }))
}
