//! Category Classifier — keyword-driven tagging of a resume into coarse job
//! domains.
//!
//! This is a heuristic, not a trained classifier: a case-insensitive
//! substring hit on any keyword of a category tags the resume with that
//! category, and categories are matched independently. False positives and
//! negatives are acceptable.

/// Sentinel category used when nothing in the taxonomy matches.
pub const GENERAL_CATEGORY: &str = "General";

/// Default category → keyword taxonomy. Output order follows this table, not
/// match order.
pub const DEFAULT_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Data Science",
        &[
            "python",
            "machine learning",
            "pandas",
            "numpy",
            "scikit-learn",
            "nlp",
            "regression",
            "clustering",
            "tensorflow",
            "pytorch",
        ],
    ),
    (
        "Web Development",
        &[
            "html", "css", "javascript", "react", "angular", "vue", "django", "flask", "node",
            "express",
        ],
    ),
    (
        "Mobile Development",
        &["android", "ios", "swift", "kotlin", "react native", "flutter"],
    ),
    (
        "DevOps",
        &[
            "docker",
            "kubernetes",
            "aws",
            "azure",
            "ci/cd",
            "jenkins",
            "terraform",
            "ansible",
        ],
    ),
    (
        "Backend Development",
        &["api", "rest", "graphql", "microservices", "database", "sql", "mongodb"],
    ),
    (
        "Frontend Development",
        &["ui", "ux", "responsive", "bootstrap", "tailwind", "sass", "webpack"],
    ),
    (
        "Finance",
        &["accounting", "audit", "financial", "tax", "risk", "investment"],
    ),
    (
        "Marketing",
        &[
            "seo",
            "social media",
            "campaign",
            "branding",
            "content",
            "digital marketing",
        ],
    ),
];

/// Classifies normalized resume text against the default taxonomy.
/// Always returns a non-empty set: `["General"]` when nothing matches.
pub fn classify(text: &str) -> Vec<String> {
    classify_with(DEFAULT_TAXONOMY, text)
}

/// Classifies against a caller-supplied taxonomy. The first matching keyword
/// of a category suffices; no per-category scoring.
pub fn classify_with(taxonomy: &[(&str, &[&str])], text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    let detected: Vec<String> = taxonomy
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| category.to_string())
        .collect();

    if detected.is_empty() {
        vec![GENERAL_CATEGORY.to_string()]
    } else {
        detected
    }
}
