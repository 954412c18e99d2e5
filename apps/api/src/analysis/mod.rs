//! Scholarship analysis — one-shot transformation from a complete
//! `Scholarship` to a `ScholarshipAnalysis` via a single LLM call.

pub mod prompts;

use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::entities::{AnalysisWeights, EssayTone, Scholarship, ScholarshipAnalysis};

use self::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};

/// Model output shape. Extra keys are ignored; `scholarship_id` is taken
/// from the input, never trusted from the model.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    weights: AnalysisWeights,
    tone: Vec<EssayTone>,
    priority_summary: String,
    #[serde(default)]
    evidence_snippets: Vec<String>,
}

/// Analyzes a scholarship's priorities. Rejects partial scholarships up
/// front; the result is either a fully validated analysis or a typed
/// failure — never a partially populated one.
pub async fn analyze_scholarship(
    generator: &dyn TextGenerator,
    scholarship: &Scholarship,
) -> Result<ScholarshipAnalysis, AppError> {
    let missing = scholarship.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "scholarship is missing required fields: {}",
            missing.join(", ")
        )));
    }

    let scholarship_json =
        serde_json::to_string_pretty(scholarship).map_err(anyhow::Error::from)?;
    let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{scholarship_json}", &scholarship_json);

    let text = generator
        .generate(ANALYSIS_SYSTEM, &prompt)
        .await
        .map_err(|e| {
            if e.is_transport() {
                AppError::TransportUnavailable(e.to_string())
            } else {
                failed(&scholarship.id, e.to_string())
            }
        })?;

    let raw: RawAnalysis = serde_json::from_str(strip_json_fences(&text))
        .map_err(|e| failed(&scholarship.id, format!("unparseable analysis: {e}")))?;

    if !raw.weights.all_non_negative() {
        return Err(failed(
            &scholarship.id,
            "analysis weights must be non-negative".to_string(),
        ));
    }
    if raw.tone.is_empty() {
        return Err(failed(
            &scholarship.id,
            "analysis tone list is empty".to_string(),
        ));
    }

    info!(
        "Analyzed scholarship {}: {} tones, {} evidence snippets",
        scholarship.id,
        raw.tone.len(),
        raw.evidence_snippets.len()
    );

    Ok(ScholarshipAnalysis {
        scholarship_id: scholarship.id.clone(),
        weights: raw.weights,
        tone: raw.tone,
        priority_summary: raw.priority_summary,
        evidence_snippets: raw.evidence_snippets,
    })
}

fn failed(scholarship_id: &str, reason: String) -> AppError {
    AppError::AnalysisGenerationFailed {
        scholarship_id: scholarship_id.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedGenerator, UnreachableGenerator};

    fn scholarship() -> Scholarship {
        Scholarship {
            id: "sch-42".to_string(),
            name: "First Horizon Award".to_string(),
            amount: 2500,
            deadline: "2026-05-15".to_string(),
            description: "For first-generation, low-income students pursuing STEM.".to_string(),
            criteria_text: "Applicants must demonstrate financial need.".to_string(),
            tags: vec!["stem".to_string(), "need-based".to_string()],
        }
    }

    const VALID_ANALYSIS: &str = r#"{
        "weights": {
            "academics": 0.2,
            "leadership": 0.1,
            "community_service": 0.1,
            "financial_need": 0.5,
            "innovation": 0.1
        },
        "tone": ["impact-focused", "formal"],
        "priority_summary": "The committee rewards demonstrated financial need above all.",
        "evidence_snippets": ["first-generation, low-income students"]
    }"#;

    #[tokio::test]
    async fn test_valid_analysis_is_accepted() {
        let generator = CannedGenerator::new(VALID_ANALYSIS);
        let analysis = analyze_scholarship(&generator, &scholarship()).await.unwrap();
        assert_eq!(analysis.scholarship_id, "sch-42");
        assert_eq!(analysis.tone[0], EssayTone::ImpactFocused);
        assert!(analysis.weights.financial_need > analysis.weights.innovation);
    }

    #[tokio::test]
    async fn test_fenced_analysis_is_accepted() {
        let generator = CannedGenerator::new(format!("```json\n{VALID_ANALYSIS}\n```"));
        assert!(analyze_scholarship(&generator, &scholarship()).await.is_ok());
    }

    #[tokio::test]
    async fn test_partial_scholarship_is_rejected_before_any_call() {
        let mut s = scholarship();
        s.criteria_text = String::new();
        let generator = CannedGenerator::new(VALID_ANALYSIS);
        let err = analyze_scholarship(&generator, &s).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_weight_fails_with_scholarship_id() {
        let generator = CannedGenerator::new(
            r#"{"weights": {"academics": 0.2, "leadership": 0.1, "community_service": 0.1,
                "financial_need": -0.5, "innovation": 0.1},
               "tone": ["formal"], "priority_summary": "x", "evidence_snippets": []}"#,
        );
        let err = analyze_scholarship(&generator, &scholarship()).await.unwrap_err();
        match err {
            AppError::AnalysisGenerationFailed { scholarship_id, .. } => {
                assert_eq!(scholarship_id, "sch-42")
            }
            other => panic!("expected AnalysisGenerationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_tone_label_fails() {
        let generator = CannedGenerator::new(
            r#"{"weights": {"academics": 1, "leadership": 1, "community_service": 1,
                "financial_need": 1, "innovation": 1},
               "tone": ["sarcastic"], "priority_summary": "x", "evidence_snippets": []}"#,
        );
        let err = analyze_scholarship(&generator, &scholarship()).await.unwrap_err();
        assert!(matches!(err, AppError::AnalysisGenerationFailed { .. }));
    }

    #[tokio::test]
    async fn test_empty_tone_list_fails() {
        let generator = CannedGenerator::new(
            r#"{"weights": {"academics": 1, "leadership": 1, "community_service": 1,
                "financial_need": 1, "innovation": 1},
               "tone": [], "priority_summary": "x", "evidence_snippets": []}"#,
        );
        let err = analyze_scholarship(&generator, &scholarship()).await.unwrap_err();
        assert!(matches!(err, AppError::AnalysisGenerationFailed { .. }));
    }

    #[tokio::test]
    async fn test_non_json_output_fails() {
        let generator = CannedGenerator::new("The committee values need and merit.");
        let err = analyze_scholarship(&generator, &scholarship()).await.unwrap_err();
        assert!(matches!(err, AppError::AnalysisGenerationFailed { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_service_maps_to_transport_error() {
        let err = analyze_scholarship(&UnreachableGenerator, &scholarship())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TransportUnavailable(_)));
    }

    #[tokio::test]
    async fn test_prompt_carries_the_scholarship() {
        let generator = CannedGenerator::new(VALID_ANALYSIS);
        analyze_scholarship(&generator, &scholarship()).await.unwrap();
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("First Horizon Award"));
        assert!(prompts[0].contains("financial need"));
    }
}
