//! # Relevance Checker
//!
//! A keyword heuristic that decides whether a question is about the PowerCast
//! platform. Matching is a case-insensitive substring search, so short keywords
//! like `hi` also match inside longer words.

/// The fixed set of domain keywords.
pub const RELEVANT_KEYWORDS: &[&str] = &[
    "electricity",
    "power",
    "forecast",
    "demand",
    "load",
    "AI",
    "weather",
    "solar",
    "PowerCast",
    "renewable",
    "energy",
    "hi",
    "hello",
    "historical",
    "data",
    "analytics",
    "grid",
    "planning",
    "India",
];

/// Returns `true` if the question mentions at least one domain keyword.
pub fn is_relevant(question: &str) -> bool {
    let lowered = question.to_lowercase();
    RELEVANT_KEYWORDS
        .iter()
        .any(|kw| lowered.contains(&kw.to_lowercase()))
}

/// Returns every keyword found in the question, in declaration order.
pub fn matched_keywords(question: &str) -> Vec<&'static str> {
    let lowered = question.to_lowercase();
    RELEVANT_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(&kw.to_lowercase()))
        .collect()
}
