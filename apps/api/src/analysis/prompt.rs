//! Prompt Assembler — merges the configured instruction template with
//! normalized resume text.

use thiserror::Error;

/// Literal substitution marker expected in the configured template.
pub const RESUME_TEXT_MARKER: &str = "{{RESUME_TEXT}}";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("resume analysis prompt template is missing or empty (set PROMPT_RESUME_ANALYSIS)")]
    TemplateMissing,
}

/// Validated-at-startup analysis prompt template.
///
/// Only presence is validated: a template without the `{{RESUME_TEXT}}`
/// marker is accepted and passed to the model unchanged. Known risk, kept to
/// match observed behavior.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Fails with `TemplateMissing` when the configured template is absent or
    /// blank. This is a startup configuration error, not a per-request one.
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        if template.trim().is_empty() {
            return Err(TemplateError::TemplateMissing);
        }
        Ok(Self {
            template: template.to_string(),
        })
    }

    /// Produces the model input by substituting the marker with the
    /// normalized resume text.
    pub fn assemble(&self, normalized_text: &str) -> String {
        self.template.replace(RESUME_TEXT_MARKER, normalized_text)
    }
}
