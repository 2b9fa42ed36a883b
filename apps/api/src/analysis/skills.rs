//! Basic skill extraction, used only when the model is unreachable.

/// Lowercase keyword → display name. Iteration order of this table is the
/// output order.
pub const BASIC_SKILLS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("react", "React"),
    ("java", "Java"),
    ("sql", "SQL"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("docker", "Docker"),
    ("aws", "AWS"),
    ("git", "Git"),
    ("linux", "Linux"),
];

/// Returns the display name of every dictionary keyword contained in the
/// lowercased input.
pub fn basic_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    BASIC_SKILLS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, display)| display.to_string())
        .collect()
}
