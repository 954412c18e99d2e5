//! Core request/response entities: scholarships, students, and the derived
//! analysis/match records. All ids and the deadline are caller-supplied
//! opaque strings; nothing here is generated or parsed server-side.

use serde::{Deserialize, Serialize};

/// An externally funded award opportunity with eligibility criteria.
/// Immutable per request; supplied whole by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub deadline: String,
    pub description: String,
    pub criteria_text: String,
    pub tags: Vec<String>,
}

impl Scholarship {
    /// Names of required text fields that are empty. Analysis rejects any
    /// partial scholarship, so callers can surface exactly what is missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.trim().is_empty() {
            missing.push("id");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.deadline.trim().is_empty() {
            missing.push("deadline");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.criteria_text.trim().is_empty() {
            missing.push("criteria_text");
        }
        missing
    }
}

/// A student as submitted for matching and essay generation — a complete
/// entity, unlike the incrementally built `StudentProfile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub gpa: f64,
    pub major: String,
    pub year: String,
    pub activities: Vec<String>,
    pub achievements: Vec<String>,
    pub background: String,
    pub stories: Vec<String>,
}

/// Recommended essay tone labels. Closed enumeration — analysis output with
/// any other label is rejected, not coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EssayTone {
    Formal,
    Conversational,
    ImpactFocused,
    Inspirational,
    Technical,
    Concise,
}

/// Weight vector over the five fixed scoring dimensions. Non-negative reals;
/// NOT normalized — callers must not assume the weights sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisWeights {
    pub academics: f64,
    pub leadership: f64,
    pub community_service: f64,
    pub financial_need: f64,
    pub innovation: f64,
}

impl AnalysisWeights {
    pub fn all_non_negative(&self) -> bool {
        [
            self.academics,
            self.leadership,
            self.community_service,
            self.financial_need,
            self.innovation,
        ]
        .iter()
        .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Derived weighting/tone profile describing what a scholarship values.
/// Produced once per scholarship, then only consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipAnalysis {
    pub scholarship_id: String,
    pub weights: AnalysisWeights,
    pub tone: Vec<EssayTone>,
    pub priority_summary: String,
    pub evidence_snippets: Vec<String>,
}

/// Derived compatibility record between one student and one scholarship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentScholarshipMatch {
    pub student_id: String,
    pub scholarship_id: String,
    /// Always in [0, 100]; out-of-range model output is clamped on ingest.
    pub match_score: u8,
    pub top_reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scholarship() -> Scholarship {
        Scholarship {
            id: "sch-001".to_string(),
            name: "Future Leaders Grant".to_string(),
            amount: 5000,
            deadline: "2026-03-01".to_string(),
            description: "Supports students with a record of community leadership.".to_string(),
            criteria_text: "Open to undergraduates with demonstrated leadership.".to_string(),
            tags: vec!["leadership".to_string()],
        }
    }

    #[test]
    fn test_complete_scholarship_has_no_missing_fields() {
        assert!(full_scholarship().missing_fields().is_empty());
    }

    #[test]
    fn test_blank_fields_are_reported_by_name() {
        let mut s = full_scholarship();
        s.description = "   ".to_string();
        s.criteria_text = String::new();
        assert_eq!(s.missing_fields(), vec!["description", "criteria_text"]);
    }

    #[test]
    fn test_tone_wire_labels_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&EssayTone::ImpactFocused).unwrap(),
            "\"impact-focused\""
        );
        let tone: EssayTone = serde_json::from_str("\"concise\"").unwrap();
        assert_eq!(tone, EssayTone::Concise);
    }

    #[test]
    fn test_unknown_tone_label_is_rejected() {
        assert!(serde_json::from_str::<EssayTone>("\"sarcastic\"").is_err());
    }

    #[test]
    fn test_weights_non_negative_check() {
        let mut w = AnalysisWeights {
            academics: 0.4,
            leadership: 0.0,
            community_service: 0.2,
            financial_need: 0.3,
            innovation: 0.1,
        };
        assert!(w.all_non_negative());
        w.innovation = -0.1;
        assert!(!w.all_non_negative());
        w.innovation = f64::NAN;
        assert!(!w.all_non_negative());
    }
}
