//! Resume analysis pipeline.
//!
//! One linear pass per invocation, no shared mutable state:
//! read → normalize → classify + assemble prompt → invoke model → extract →
//! derive scores. Only document-read errors propagate; once reading
//! succeeds the pipeline always reaches a result, substituting deterministic
//! fallback data when the model is unreachable or its reply is unparsable.

pub mod categories;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod prompt;
pub mod reader;
pub mod scoring;
pub mod skills;

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::prompt::PromptTemplate;
use crate::analysis::reader::ReadError;
use crate::llm_client::ModelInvoker;

/// Terminal aggregate of one analysis run. Owned entirely by the caller;
/// the pipeline keeps no reference to it.
///
/// The structured fields (`contact_information` through `certifications`)
/// are JSON-encoded strings, the storage format downstream report rows use.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub extracted_text: String,
    pub job_categories: Vec<String>,
    pub overall_score: i64,
    pub grammar_score: i64,
    pub keyword_match_score: i64,
    pub suggestion: String,
    pub contact_information: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
}

/// Runs the full analysis pipeline over the resume at `path`.
///
/// Fails only when the document cannot be read; model and parse failures
/// degrade into fallback scorecard data with a diagnostic suggestion.
pub async fn analyze_resume(
    path: &Path,
    template: &PromptTemplate,
    invoker: &dyn ModelInvoker,
) -> Result<AnalysisResult, ReadError> {
    // PDF/DOCX parsing is CPU-bound; keep it off the async runtime.
    let owned_path = path.to_path_buf();
    let raw = tokio::task::spawn_blocking(move || reader::read(&owned_path))
        .await
        .map_err(|e| ReadError::Unreadable {
            format: "unknown".to_string(),
            message: format!("task join error: {e}"),
        })??;

    let clean_text = normalizer::normalize(&raw.text, normalizer::DEFAULT_MAX_WORDS);
    info!(
        format = raw.format.as_str(),
        words = clean_text.split_whitespace().count(),
        "Resume text extracted and normalized"
    );

    let job_categories = categories::classify(&clean_text);
    let model_prompt = template.assemble(&clean_text);

    let outcome = invoker.generate(&model_prompt).await;
    let (profile, raw_output) = extractor::extract(outcome, &clean_text);

    let card = scoring::derive(&profile, &raw_output);
    info!(
        overall_score = card.overall_score,
        categories = ?job_categories,
        "Resume analysis complete"
    );

    let contact = format!(
        "{} | {} | {}",
        profile.name, profile.email, profile.phone_number
    );

    Ok(AnalysisResult {
        extracted_text: clean_text,
        job_categories,
        overall_score: card.overall_score,
        grammar_score: card.grammar_score,
        keyword_match_score: card.keyword_match_score,
        suggestion: card.suggestion,
        contact_information: json_string(&json!(contact)),
        education: json_string(&profile.education),
        experience: json_string(&profile.work_experience),
        skills: json_string(&json!(profile.skills)),
        projects: json_string(&profile.projects),
        certifications: json_string(&profile.certifications),
    })
}

fn json_string(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Write;

    use crate::llm_client::InvokeError;

    struct FixedReply(&'static str);

    #[async_trait]
    impl ModelInvoker for FixedReply {
        async fn generate(&self, _prompt: &str) -> Result<String, InvokeError> {
            Ok(self.0.to_string())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl ModelInvoker for Unreachable {
        async fn generate(&self, _prompt: &str) -> Result<String, InvokeError> {
            Err(InvokeError::Api {
                status: 503,
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn template() -> PromptTemplate {
        PromptTemplate::new("Analyze this resume and return JSON:\n{{RESUME_TEXT}}").unwrap()
    }

    fn resume_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_pipeline_with_well_formed_model_reply() {
        let file = resume_file(
            "Jane Doe, python developer using docker.\nSee https://jane.dev or mail jane@x.com!",
        );
        let reply = FixedReply(
            r#"Here you go: {"candidate_score": 75, "name": "Jane Doe", "email": "jane@x.com",
               "phone_number": "555", "skills": ["Python", "Docker", "Kubernetes"],
               "education": [], "work_experience": [], "projects": [], "certifications": []}"#,
        );

        let result = analyze_resume(file.path(), &template(), &reply).await.unwrap();

        assert!(!result.extracted_text.contains("https://jane.dev"));
        assert!(!result.extracted_text.contains("jane@x.com"));
        assert_eq!(result.job_categories, vec!["Data Science", "DevOps"]);
        assert_eq!(result.overall_score, 75);
        assert_eq!(result.grammar_score, 71);
        assert_eq!(result.keyword_match_score, 15);
        assert_eq!(
            result.contact_information,
            "\"Jane Doe | jane@x.com | 555\""
        );
        assert_eq!(result.skills, r#"["Python","Docker","Kubernetes"]"#);
        assert_eq!(result.education, "[]");
    }

    #[tokio::test]
    async fn test_pipeline_degrades_when_model_is_unreachable() {
        let file = resume_file("Seasoned python and docker engineer");

        let result = analyze_resume(file.path(), &template(), &Unreachable)
            .await
            .unwrap();

        assert_eq!(result.overall_score, 45);
        assert_eq!(result.skills, r#"["Python","Docker"]"#);
        assert!(result.suggestion.starts_with("Error during AI analysis:"));
        assert!(result
            .suggestion
            .contains("AI Analysis temporarily unavailable:"));
        assert!(result.suggestion.contains("Areas for Improvement:"));
    }

    #[tokio::test]
    async fn test_pipeline_degrades_on_unparsable_model_reply() {
        let file = resume_file("General resume text");

        let result = analyze_resume(file.path(), &template(), &FixedReply("I refuse."))
            .await
            .unwrap();

        assert_eq!(result.overall_score, 50);
        assert!(result
            .suggestion
            .starts_with("Failed to parse AI response properly."));
        assert!(result.suggestion.contains("- Failed to parse AI output"));
        assert_eq!(result.keyword_match_score, 0);
    }

    #[tokio::test]
    async fn test_pipeline_propagates_unsupported_format() {
        let err = analyze_resume(Path::new("resume.xyz"), &template(), &Unreachable)
            .await
            .unwrap_err();
        assert!(matches!(err, ReadError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_unmatched_resume_gets_general_category() {
        let file = resume_file("Shepherd tending alpine flocks since 2001");

        let result = analyze_resume(file.path(), &template(), &FixedReply("{}"))
            .await
            .unwrap();

        assert_eq!(result.job_categories, vec!["General"]);
        assert_eq!(result.overall_score, 0);
    }
}
