//! Deterministic multi-section answer assembly.
//!
//! The section labels and their ordering are an external contract: the
//! presentation layer pattern-matches on them, so they must never change.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::Chunk;
use crate::profile::Profile;
use crate::synthesis::plan::generate_twelve_week_plan;

/// Fixed closing line, always present, always last.
pub const MOTIVATION_LINE: &str =
    "Motivation: Take small consistent steps — progress compounds faster than you think!";

/// Maximum number of skills recommended.
const MAX_SKILLS: usize = 5;

/// Domain terms preferred over raw frequency when picking skills from hits.
const KNOWN_SKILL_TOKENS: &[&str] = &[
    "python",
    "sql",
    "machine",
    "data",
    "ml",
    "statistics",
    "matlab",
    "r",
    "cloud",
    "aws",
    "azure",
    "docker",
    "git",
    "javascript",
    "react",
    "cad",
    "staa",
    "design",
    "ux",
    "deep",
    "neural",
    "nlp",
];

static KEYWORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]{3,}\b").unwrap());

static TWELVE_WEEK_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(12[- ]?week|twelve week|12 week plan|create a 12 week plan)\b").unwrap()
});

/// Assembles the full multi-section answer for a query.
///
/// Byte-deterministic: the same (query, profile, hits) triple always yields
/// identical output. Sections appear in fixed order: summary, recommended
/// skills, next steps, sample projects, an optional 12-week plan (only when
/// the query explicitly asks for one), and the closing motivational line.
#[must_use]
pub fn synthesize_answer(query: &str, profile: &Profile, hits: &[Chunk]) -> String {
    let interest = profile.display_interest();
    let interest_key = interest.to_lowercase();

    let name_part = profile
        .name
        .as_deref()
        .map(|name| format!("{name}, "))
        .unwrap_or_default();
    let summary = format!(
        "{name_part}based on your interest in {interest} and level ({level}), \
         here is a concise plan and skills to focus on.",
        level = profile.level_raw()
    );

    let mut skills = top_keywords_from_hits(hits, MAX_SKILLS);
    if skills.is_empty() {
        skills = fallback_skills(&interest_key);
    }

    let steps = [
        "Strengthen your theory/fundamentals (NCERT / course-specific basics).",
        "Learn one practical tool/tech (e.g., Python for data or Figma for design).",
        "Build a small, demonstrable project (document results).",
        "Take one recognized course/certification and publish your work.",
    ];

    let projects = sample_projects(&interest_key);

    let mut out: Vec<String> = Vec::new();
    out.push(format!("Summary: {summary}"));
    out.push(String::new());
    out.push("Recommended skills & certifications:".to_string());
    out.extend(skills.iter().map(|s| format!("- {s}")));
    out.push(String::new());
    out.push("Next Steps:".to_string());
    out.extend(steps.iter().map(|s| format!("- {s}")));
    out.push(String::new());
    out.push("Sample Projects:".to_string());
    out.extend(
        projects
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {p}", i + 1)),
    );
    out.push(String::new());

    if TWELVE_WEEK_TRIGGER.is_match(query) {
        out.push("12-week plan:".to_string());
        out.extend(
            generate_twelve_week_plan(profile)
                .into_iter()
                .enumerate()
                .map(|(i, entry)| format!("Week block {}: {entry}", i + 1)),
        );
        out.push(String::new());
    }

    out.push(MOTIVATION_LINE.to_string());
    out.join("\n")
}

/// Picks up to `max` keyword-like tokens from the joined hit text.
///
/// Tokens are frequency-ranked (stable: first occurrence breaks ties), but
/// the known domain terms are tried first so "python" beats filler words
/// that merely appear more often. The first letter of each pick is
/// capitalized.
fn top_keywords_from_hits(hits: &[Chunk], max: usize) -> Vec<String> {
    if hits.is_empty() {
        return Vec::new();
    }
    let text = hits
        .iter()
        .map(|hit| hit.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    // Frequency count preserving first-occurrence order for stable ranking.
    let mut order: Vec<&str> = Vec::new();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in KEYWORD_TOKEN.find_iter(&text) {
        let token = token.as_str();
        let count = freq.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }
    let mut candidates = order;
    candidates.sort_by_key(|token| std::cmp::Reverse(freq[token]));

    let mut picks: Vec<&str> = Vec::new();
    for candidate in KNOWN_SKILL_TOKENS.iter().copied().chain(candidates) {
        if picks.len() >= max {
            break;
        }
        if text.contains(candidate) && !picks.contains(&candidate) {
            picks.push(candidate);
        }
    }
    picks.into_iter().map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Interest-keyed static skill lists used when hits yield no picks.
fn fallback_skills(interest_key: &str) -> Vec<String> {
    let skills: &[&str] = if interest_key.contains("data")
        || interest_key.contains("ai")
        || interest_key.contains("ml")
    {
        &[
            "Python",
            "SQL",
            "Statistics",
            "Machine Learning",
            "Data Visualization",
        ]
    } else if interest_key.contains("design") {
        &[
            "Design Thinking",
            "Figma",
            "Wireframing",
            "Prototyping",
            "User Research",
        ]
    } else {
        &[
            "Core Subject Mastery",
            "Basic Data Skills",
            "Research & Documentation",
        ]
    };
    skills.iter().map(|s| s.to_string()).collect()
}

/// Exactly two sample projects per interest bucket.
fn sample_projects(interest_key: &str) -> [&'static str; 2] {
    if interest_key.contains("data") || interest_key.contains("ai") || interest_key.contains("ml") {
        [
            "Project 1 — Classify a dataset (end-to-end): Data cleaning → model → evaluation → write-up.",
            "Project 2 — Data visualization report on a public dataset (publish on GitHub).",
        ]
    } else if interest_key.contains("design") {
        [
            "Project 1 — Complete a 2-week UX case study: research → wireframes → prototype.",
            "Project 2 — Redesign a small app page and document UX decisions.",
        ]
    } else {
        [
            "Project 1 — Conduct a small experiment or study and write the results.",
            "Project 2 — Create a presentation/summary of learnings and share it publicly.",
        ]
    }
}
