// LLM prompt constants for scholarship analysis.

/// System prompt for scholarship analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert scholarship advisor analyzing what a scholarship committee values. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{scholarship_json}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following scholarship and describe what its committee prioritizes.

Return a JSON object with this EXACT schema (no extra fields):
{
  "weights": {
    "academics": 0.3,
    "leadership": 0.25,
    "community_service": 0.2,
    "financial_need": 0.15,
    "innovation": 0.1
  },
  "tone": ["impact-focused", "formal"],
  "priority_summary": "One short paragraph describing what this committee rewards most.",
  "evidence_snippets": [
    "short phrase quoted or closely paraphrased from the description"
  ]
}

Rules:

WEIGHTS: exactly the five dimensions above. Each weight is a non-negative number
reflecting how strongly the scholarship text emphasizes that dimension. Weights
do NOT need to sum to 1.

TONE: a non-empty list drawn ONLY from:
"formal", "conversational", "impact-focused", "inspirational", "technical", "concise".
Order from most to least recommended for an applicant's essay.

EVIDENCE_SNIPPETS: short phrases taken from the scholarship description or
criteria that justify the weights. Prefer verbatim quotes; close paraphrases
are acceptable. Do NOT invent criteria the text does not mention.

SCHOLARSHIP:
{scholarship_json}"#;
