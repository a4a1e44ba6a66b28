//! The retrieval corpus: bounded-length chunks cut from seed documents.
//!
//! Seed files are plain text, optionally divided into sections by `---`
//! delimiter lines or markdown headings. Each section becomes one chunk;
//! oversized sections are sliced into fixed-size pieces.

mod loader;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use loader::{CorpusError, KnowledgeBase};

/// Maximum chunk length in characters. Longer sections are sliced into
/// pieces of exactly this size (no overlap).
pub const MAX_CHUNK_LEN: usize = 1000;

/// Section delimiters: a line of three or more dashes, or a markdown
/// heading marker. The heading marker itself is discarded; the heading text
/// stays with the following section.
static SECTION_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*-{3,}\s*\n|\n#+\s+").unwrap());

/// A bounded-length contiguous piece of a seed document, the unit of
/// retrieval.
///
/// `id` is `"<file name>:<chunk index>"`, unique within a process run.
/// Chunks are created once at corpus load time and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
}

impl Chunk {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Splits a seed document into chunks, preserving source order.
///
/// Sections are cut at delimiter lines, trimmed, and dropped when empty.
/// Any section longer than [`MAX_CHUNK_LEN`] is sliced into
/// `MAX_CHUNK_LEN`-character pieces on char boundaries.
#[must_use]
pub fn split_into_chunks(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    for section in SECTION_DELIMITER.split(text) {
        let section = section.trim();
        if section.is_empty() {
            continue;
        }
        if section.chars().count() <= MAX_CHUNK_LEN {
            chunks.push(section.to_string());
        } else {
            let chars: Vec<char> = section.chars().collect();
            for piece in chars.chunks(MAX_CHUNK_LEN) {
                chunks.push(piece.iter().collect());
            }
        }
    }
    chunks
}
