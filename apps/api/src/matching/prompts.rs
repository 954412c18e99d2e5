// LLM prompt constants for student/scholarship matching.

/// System prompt for match scoring — enforces JSON-only output.
pub const MATCH_SYSTEM: &str =
    "You are an expert scholarship advisor scoring how well a student fits a scholarship. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Match prompt template.
/// Replace: {student_json}, {scholarship_json}, {analysis_json}
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Score how well this student matches this scholarship, guided by the committee analysis.

Return a JSON object with this EXACT schema (no extra fields):
{
  "match_score": 72,
  "top_reasons": [
    "Strong academic record aligns with the committee's academics weight",
    "No stated financial need information, lowering confidence"
  ]
}

SCORING RUBRIC (match_score is an integer from 0 to 100):
- 0-20: very poor fit or ineligible
- 21-40: weak fit
- 41-60: moderate fit
- 61-80: strong fit
- 81-100: excellent fit

HARD RULES:
1. Weigh the dimensions according to the ANALYSIS weights — a high-weight
   dimension the student clearly satisfies should raise the score far more
   than a low-weight one.
2. If the student is missing information for a high-weight dimension, do NOT
   assume it is satisfied. Lower the score and state the uncertainty
   explicitly in top_reasons. Missing data for a high-weight dimension means
   the score cannot be in the 81-100 band.
3. top_reasons: 3 to 5 short, human-readable strings, most important first.
   Reference specific facts from the student and the scholarship.
4. Do NOT invent student facts that are not in the profile.

STUDENT:
{student_json}

SCHOLARSHIP:
{scholarship_json}

ANALYSIS:
{analysis_json}"#;
