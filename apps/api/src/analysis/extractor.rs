//! Response Extractor — turns the model's free-form reply (or an invocation
//! failure) into an `ExtractedProfile`.
//!
//! The model's contract is only "returns text that may or may not contain a
//! parseable JSON object", so structural defects are data-quality events:
//! this stage never errors. Malformed output and unreachable models both
//! degrade to deterministic fallback profiles carrying a diagnostic message.

use serde_json::{json, Value};
use tracing::warn;

use crate::analysis::skills::basic_skills;
use crate::llm_client::InvokeError;

/// Raw-output replacement used when the model's reply cannot be parsed.
const UNPARSED_OUTPUT: &str = "Failed to parse AI response properly.";

/// Structured (or fallback) interpretation of the model's reply. Every field
/// has a default; nothing in the model's JSON is required.
#[derive(Debug, Clone)]
pub struct ExtractedProfile {
    pub candidate_score: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub education: Value,
    pub work_experience: Value,
    pub skills: Vec<String>,
    pub projects: Value,
    pub certifications: Value,
    pub reasons_for_rejection: Vec<String>,
}

impl ExtractedProfile {
    fn empty() -> Self {
        Self {
            candidate_score: 0,
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            education: json!([]),
            work_experience: json!([]),
            skills: Vec::new(),
            projects: json!([]),
            certifications: json!([]),
            reasons_for_rejection: Vec::new(),
        }
    }

    /// Builds a profile from parsed model JSON, defaulting every absent key.
    pub fn from_value(value: &Value) -> Self {
        Self {
            candidate_score: value
                .get("candidate_score")
                .and_then(|v| v.as_i64())
                .unwrap_or(0),
            name: string_field(value, "name"),
            email: string_field(value, "email"),
            phone_number: string_field(value, "phone_number"),
            education: array_field(value, "education"),
            work_experience: array_field(value, "work_experience"),
            skills: string_list(value, "skills"),
            projects: array_field(value, "projects"),
            certifications: array_field(value, "certifications"),
            reasons_for_rejection: string_list(value, "reasons_for_rejection"),
        }
    }

    /// Fallback when the model could not be reached at all. Skills come from
    /// the basic keyword scan so the scorecard is not entirely empty.
    pub fn unavailable(cause: &str, skills: Vec<String>) -> Self {
        Self {
            candidate_score: 45,
            name: "Unknown".to_string(),
            skills,
            reasons_for_rejection: vec![format!("AI Analysis temporarily unavailable: {cause}")],
            ..Self::empty()
        }
    }

    /// Fallback when the model replied but its output held no parseable JSON.
    pub fn unparsed() -> Self {
        Self {
            candidate_score: 50,
            reasons_for_rejection: vec!["Failed to parse AI output".to_string()],
            ..Self::empty()
        }
    }
}

/// Lenient JSON recovery: the substring from the first `{` to the last `}`,
/// inclusive. A deliberate, bounded tolerance mechanism for models that wrap
/// JSON in prose or code fences — not a general JSON scanner.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let first = raw.find('{')?;
    let last = raw.rfind('}')?;
    if last < first {
        return None;
    }
    Some(&raw[first..=last])
}

/// Reduces the invoker outcome to a profile plus the raw text used as the
/// suggestion base. Never errors.
pub fn extract(
    outcome: Result<String, InvokeError>,
    normalized_text: &str,
) -> (ExtractedProfile, String) {
    match outcome {
        Ok(raw) => match parse_profile(&raw) {
            Some(profile) => (profile, raw),
            None => {
                warn!("Model reply held no parseable JSON object");
                (ExtractedProfile::unparsed(), UNPARSED_OUTPUT.to_string())
            }
        },
        Err(e) => {
            warn!("Model invocation failed: {e}");
            let profile = ExtractedProfile::unavailable(&e.to_string(), basic_skills(normalized_text));
            (profile, format!("Error during AI analysis: {e}"))
        }
    }
}

fn parse_profile(raw: &str) -> Option<ExtractedProfile> {
    let candidate = extract_json_object(raw)?;
    let value: Value = serde_json::from_str(candidate).ok()?;
    Some(ExtractedProfile::from_value(&value))
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn array_field(value: &Value, key: &str) -> Value {
    match value.get(key) {
        Some(v @ Value::Array(_)) => v.clone(),
        _ => json!([]),
    }
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .map(|item| match item.as_str() {
                    Some(s) => s.to_string(),
                    None => item.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
