//! Essay generation — two one-shot transformations producing free text.
//!
//! The length bands, first-person voice, and no-fabrication rules live in
//! the prompt contract; the only programmatic responsibility here is to
//! extract plain text and fail typed when there is none.

pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::entities::{Scholarship, ScholarshipAnalysis, Student, StudentScholarshipMatch};

use self::prompts::{
    GENERAL_ESSAY_PROMPT_TEMPLATE, GENERAL_ESSAY_SYSTEM, SPECIFIC_ESSAY_PROMPT_TEMPLATE,
    SPECIFIC_ESSAY_SYSTEM,
};

/// Generates a general personal statement from the student entity alone.
/// Target 600-750 words, enforced by the prompt contract.
pub async fn generate_general_essay(
    generator: &dyn TextGenerator,
    student: &Student,
) -> Result<String, AppError> {
    let prompt = GENERAL_ESSAY_PROMPT_TEMPLATE.replace(
        "{student_json}",
        &serde_json::to_string_pretty(student).map_err(anyhow::Error::from)?,
    );

    let essay = extract_essay(generator.generate(GENERAL_ESSAY_SYSTEM, &prompt).await)?;
    info!(
        "Generated general essay for student {} ({} words)",
        student.id,
        essay.split_whitespace().count()
    );
    Ok(essay)
}

/// Generates an essay tailored to one scholarship, informed by the derived
/// analysis and match. Target 500-750 words, enforced by the prompt contract.
pub async fn generate_specific_essay(
    generator: &dyn TextGenerator,
    student: &Student,
    scholarship: &Scholarship,
    analysis: &ScholarshipAnalysis,
    student_match: &StudentScholarshipMatch,
) -> Result<String, AppError> {
    let prompt = SPECIFIC_ESSAY_PROMPT_TEMPLATE
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
        )
        .replace(
            "{match_json}",
            &serde_json::to_string_pretty(student_match).map_err(anyhow::Error::from)?,
        );

    let essay = extract_essay(generator.generate(SPECIFIC_ESSAY_SYSTEM, &prompt).await)?;
    info!(
        "Generated specific essay for student {} / scholarship {} ({} words)",
        student.id,
        scholarship.id,
        essay.split_whitespace().count()
    );
    Ok(essay)
}

/// Turns a raw generation result into trimmed essay text, or a typed failure
/// when the response contains no extractable text.
fn extract_essay(result: Result<String, LlmError>) -> Result<String, AppError> {
    let text = result.map_err(|e| {
        if e.is_transport() {
            AppError::TransportUnavailable(e.to_string())
        } else {
            AppError::EssayGenerationFailed(e.to_string())
        }
    })?;

    let essay = text.trim();
    if essay.is_empty() {
        return Err(AppError::EssayGenerationFailed(
            "response contained no essay text".to_string(),
        ));
    }
    Ok(essay.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{CannedGenerator, UnreachableGenerator};
    use crate::models::entities::AnalysisWeights;
    use crate::models::entities::EssayTone;

    fn student() -> Student {
        Student {
            id: "stu-7".to_string(),
            name: "Aria Okonkwo".to_string(),
            gpa: 3.8,
            major: "Mechanical Engineering".to_string(),
            year: "sophomore".to_string(),
            activities: vec!["Robotics club captain".to_string()],
            achievements: vec![],
            background: "First-generation college student.".to_string(),
            stories: vec!["Built a prosthetic hand prototype.".to_string()],
        }
    }

    fn scholarship() -> Scholarship {
        Scholarship {
            id: "sch-42".to_string(),
            name: "First Horizon Award".to_string(),
            amount: 2500,
            deadline: "2026-05-15".to_string(),
            description: "For first-generation students in STEM.".to_string(),
            criteria_text: "Demonstrated financial need.".to_string(),
            tags: vec![],
        }
    }

    fn analysis() -> ScholarshipAnalysis {
        ScholarshipAnalysis {
            scholarship_id: "sch-42".to_string(),
            weights: AnalysisWeights {
                academics: 0.2,
                leadership: 0.1,
                community_service: 0.1,
                financial_need: 0.5,
                innovation: 0.1,
            },
            tone: vec![EssayTone::Inspirational],
            priority_summary: "Need first.".to_string(),
            evidence_snippets: vec![],
        }
    }

    fn student_match() -> StudentScholarshipMatch {
        StudentScholarshipMatch {
            student_id: "stu-7".to_string(),
            scholarship_id: "sch-42".to_string(),
            match_score: 64,
            top_reasons: vec!["First-generation background fits".to_string()],
        }
    }

    #[tokio::test]
    async fn test_general_essay_returns_trimmed_text() {
        let generator = CannedGenerator::new("\n  Growing up, I learned to build before I learned to ask permission.  \n");
        let essay = generate_general_essay(&generator, &student()).await.unwrap();
        assert_eq!(
            essay,
            "Growing up, I learned to build before I learned to ask permission."
        );
    }

    #[tokio::test]
    async fn test_whitespace_only_output_fails() {
        let generator = CannedGenerator::new("   \n\t  ");
        let err = generate_general_essay(&generator, &student()).await.unwrap_err();
        assert!(matches!(err, AppError::EssayGenerationFailed(_)));
    }

    #[tokio::test]
    async fn test_specific_essay_prompt_carries_all_four_entities() {
        let generator = CannedGenerator::new("My first robot was a mess of servos and hope.");
        generate_specific_essay(
            &generator,
            &student(),
            &scholarship(),
            &analysis(),
            &student_match(),
        )
        .await
        .unwrap();
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Aria Okonkwo"));
        assert!(prompts[0].contains("First Horizon Award"));
        assert!(prompts[0].contains("financial_need"));
        assert!(prompts[0].contains("First-generation background fits"));
    }

    #[tokio::test]
    async fn test_unreachable_service_maps_to_transport_error() {
        let err = generate_general_essay(&UnreachableGenerator, &student())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::TransportUnavailable(_)));
    }
}
