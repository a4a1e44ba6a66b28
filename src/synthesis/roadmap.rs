//! Phased roadmap text, keyed purely off the profile.

use crate::corpus::Chunk;
use crate::profile::Profile;

/// Characters of each hit kept in a knowledge-base bullet.
const BULLET_PREVIEW_LEN: usize = 220;

const PHASE_LINES: [&str; 4] = [
    "### Phase 0 — Foundations (2–4 weeks)\nFocus: Core concepts & quick wins",
    "### Phase 1 — Skills & Tools (4–8 weeks)\nFocus: Hands-on practice + 1 capstone",
    "### Phase 2 — Portfolio & Cert (4–6 weeks)\nFocus: Publish work + certification",
    "### Phase 3 — Internships & Applications (4–8 weeks)\nFocus: Networking + internships",
];

/// The query the roadmap runs against the retriever, derived from profile
/// attributes alone.
#[must_use]
pub fn roadmap_query(profile: &Profile) -> String {
    format!(
        "roadmap {} {} {}",
        profile.interest_or_general(),
        profile.standard_or_empty(),
        profile.level_key()
    )
}

/// Renders the phased roadmap for a profile and its retrieved hits.
///
/// With hits, the four fixed phases are followed by one-line summaries of
/// each hit. With zero hits the fixed fallback phase list is emitted
/// verbatim, never an empty string.
#[must_use]
pub fn render_roadmap(profile: &Profile, hits: &[Chunk]) -> String {
    let goal_line = format!("🎯 Goal: {}", profile.goal_or_default());

    if hits.is_empty() {
        let mut sections: Vec<String> = vec![goal_line, String::new()];
        sections.extend(PHASE_LINES.iter().map(|p| p.to_string()));
        sections.push(String::new());
        sections.push("💡 Tip: Keep a weekly log and build small public projects.".to_string());
        return sections.join("\n\n");
    }

    let mut sections: Vec<String> = vec![goal_line, String::new()];
    sections.extend(PHASE_LINES.iter().map(|p| p.to_string()));
    sections.push(String::new());
    sections.push("📚 Based on our knowledge base:".to_string());
    sections.extend(hits.iter().map(|hit| format!("• {}...", preview(&hit.text))));
    sections.push(String::new());
    sections.push("💡 Tip: Keep a weekly log (skills learned, projects, outcomes).".to_string());
    sections.join("\n\n")
}

/// Collapses newline runs to single spaces and truncates to the preview
/// length on a char boundary.
fn preview(text: &str) -> String {
    let collapsed: String = text
        .split('\n')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapsed.chars().take(BULLET_PREVIEW_LEN).collect()
}
