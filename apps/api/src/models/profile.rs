//! The accumulated student profile built up across chat turns.
//!
//! The profile is owned entirely by the caller between requests; the service
//! is stateless. Every field is independently absent until supplied, and the
//! defensive merge in `merged_with` guarantees that an accepted turn never
//! silently erases previously known information.

use serde::{Deserialize, Serialize};

/// One job held by the student, as gathered in conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// One club, volunteer role, or other activity outside of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extracurricular {
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Structured student profile accumulated across conversation turns.
/// `Default` is the canonical empty profile: all scalars null, all lists
/// empty, goals the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub citizenship: Option<String>,
    /// e.g. "high_school", "undergraduate", "graduate"
    #[serde(default)]
    pub degree_level: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<i64>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub target_countries: Vec<String>,
    #[serde(default)]
    pub target_universities: Vec<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    /// Tri-state: Some(true) / Some(false) once stated, None while unknown.
    #[serde(default)]
    pub financial_need: Option<bool>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub extracurriculars: Vec<Extracurricular>,
    #[serde(default)]
    pub goals: String,
}

impl StudentProfile {
    /// Merges a model-returned candidate profile onto this prior profile
    /// using the overwrite-if-present rule:
    ///
    /// - scalar fields: a present candidate value wins (corrections
    ///   overwrite), an absent one keeps the prior value;
    /// - list fields: a non-empty candidate list replaces the prior list,
    ///   an empty one keeps it;
    /// - goals: a non-blank candidate narrative replaces the prior one.
    ///
    /// The result is therefore always a superset-or-equal of the prior
    /// profile's known fields, except where the candidate explicitly
    /// supplies a new value.
    pub fn merged_with(&self, candidate: StudentProfile) -> StudentProfile {
        StudentProfile {
            name: candidate.name.or_else(|| self.name.clone()),
            country: candidate.country.or_else(|| self.country.clone()),
            citizenship: candidate.citizenship.or_else(|| self.citizenship.clone()),
            degree_level: candidate.degree_level.or_else(|| self.degree_level.clone()),
            year_of_study: candidate.year_of_study.or(self.year_of_study),
            field_of_study: candidate
                .field_of_study
                .or_else(|| self.field_of_study.clone()),
            target_countries: non_empty_or(candidate.target_countries, &self.target_countries),
            target_universities: non_empty_or(
                candidate.target_universities,
                &self.target_universities,
            ),
            gpa: candidate.gpa.or(self.gpa),
            financial_need: candidate.financial_need.or(self.financial_need),
            work_experience: non_empty_or(candidate.work_experience, &self.work_experience),
            extracurriculars: non_empty_or(candidate.extracurriculars, &self.extracurriculars),
            goals: if candidate.goals.trim().is_empty() {
                self.goals.clone()
            } else {
                candidate.goals
            },
        }
    }
}

fn non_empty_or<T: Clone>(candidate: Vec<T>, prior: &[T]) -> Vec<T> {
    if candidate.is_empty() {
        prior.to_vec()
    } else {
        candidate
    }
}
