use std::sync::Arc;

use crate::analysis::prompt::PromptTemplate;
use crate::llm_client::ModelInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model invoker. Production: `GeminiClient`; tests: mocks.
    pub invoker: Arc<dyn ModelInvoker>,
    /// Analysis prompt template, validated once at startup.
    pub template: Arc<PromptTemplate>,
}
