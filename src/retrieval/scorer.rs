//! Keyword relevance scoring.

use std::sync::LazyLock;

use regex::Regex;

/// Points added when a query token matches the chunk as a whole word.
pub const WORD_MATCH_BONUS: f32 = 3.0;
/// Points added when a query token appears anywhere in the chunk. Applied
/// independently of the whole-word bonus, so a word hit earns both.
pub const SUBSTRING_BONUS: f32 = 1.0;
/// Points added when the chunk opens with a category keyword.
pub const CATEGORY_BONUS: f32 = 1.5;

/// Category keywords recognised at the start of a chunk. Seed documents
/// label their sections with these, so a leading match is a strong signal
/// that the chunk is a section header rather than loose prose.
pub const CATEGORY_KEYWORDS: &[&str] = &[
    "AI", "Data", "Science", "Career", "Skill", "Roadmap", "Cloud", "Cyber", "Software", "Design",
];

static TOKEN_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static CATEGORY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = CATEGORY_KEYWORDS.join("|");
    Regex::new(&format!(r"(?i)^\s*({alternatives})")).unwrap()
});

/// Scoring strategy used by the retriever.
///
/// Implementations must be pure: identical inputs always yield identical
/// scores. The trait exists so the keyword heuristic can later be swapped
/// for a real similarity measure without touching the retriever contract.
pub trait RelevanceScorer: Send + Sync {
    /// Scores how relevant `text` is to `query`. Higher is more relevant;
    /// scores are non-negative and unnormalised.
    fn score(&self, query: &str, text: &str) -> f32;
}

/// Token-containment scorer: no embeddings, just case-insensitive keyword
/// matching with a small bonus for category-header chunks.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordScorer;

impl RelevanceScorer for KeywordScorer {
    fn score(&self, query: &str, text: &str) -> f32 {
        let query = query.to_lowercase();
        let text_lower = text.to_lowercase();
        let mut total = 0.0;

        for token in TOKEN_SPLIT.split(&query).filter(|token| !token.is_empty()) {
            if let Ok(word_re) = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(token))) {
                if word_re.is_match(text) {
                    total += WORD_MATCH_BONUS;
                }
            }
            if text_lower.contains(token) {
                total += SUBSTRING_BONUS;
            }
        }

        if CATEGORY_PREFIX.is_match(text) {
            total += CATEGORY_BONUS;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(query: &str, text: &str) -> f32 {
        KeywordScorer.score(query, text)
    }

    #[test]
    fn relevant_text_outscores_irrelevant_text() {
        assert!(score("python sql", "Learn Python and SQL basics") > score("python sql", "Learn woodworking"));
    }

    #[test]
    fn whole_word_hit_earns_both_bonuses() {
        // "python" as a whole word: word bonus + substring bonus.
        assert_eq!(score("python", "learn python today"), WORD_MATCH_BONUS + SUBSTRING_BONUS);
        // "python" only as a substring of "pythonic": substring bonus alone.
        assert_eq!(score("python", "write pythonic code"), SUBSTRING_BONUS);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score("PYTHON", "Python is popular"), score("python", "Python is popular"));
        assert_eq!(score("sql", "SQL joins"), WORD_MATCH_BONUS + SUBSTRING_BONUS);
    }

    #[test]
    fn category_header_gets_fixed_bonus() {
        assert_eq!(score("", "Data Science careers are growing"), CATEGORY_BONUS);
        assert_eq!(score("", "  \t Career options after school"), CATEGORY_BONUS);
        assert_eq!(score("", "Growing fields include data science"), 0.0);
    }

    #[test]
    fn empty_query_scores_zero_on_plain_text() {
        assert_eq!(score("", "nothing matches here"), 0.0);
        assert_eq!(score("   !!! ", "nothing matches here"), 0.0);
    }

    #[test]
    fn scoring_is_pure() {
        let a = score("machine learning roadmap", "AI and machine learning roadmap for beginners");
        let b = score("machine learning roadmap", "AI and machine learning roadmap for beginners");
        assert_eq!(a, b);
    }

    #[test]
    fn tokens_accumulate_independently() {
        let one = score("python", "python and sql");
        let two = score("python sql", "python and sql");
        assert_eq!(two, one * 2.0);
    }
}
