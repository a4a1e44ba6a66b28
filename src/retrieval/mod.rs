//! Ranking of corpus chunks against a free-text query.

mod scorer;

use std::sync::Arc;

use crate::corpus::{Chunk, CorpusError, KnowledgeBase};

pub use scorer::{
    CATEGORY_BONUS, CATEGORY_KEYWORDS, KeywordScorer, RelevanceScorer, SUBSTRING_BONUS,
    WORD_MATCH_BONUS,
};

/// Number of hits both operations request.
pub const DEFAULT_TOP_K: usize = 6;

/// Ranks the cached corpus against queries and returns the top hits.
///
/// Scores stay internal to the retriever; callers receive only the ordered
/// chunk sequence. The sort is stable, so equal scores preserve corpus
/// order and results are fully deterministic.
pub struct Retriever {
    knowledge: Arc<KnowledgeBase>,
    scorer: Arc<dyn RelevanceScorer>,
}

impl Retriever {
    /// Builds a retriever over `knowledge` using the keyword heuristic.
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_scorer(knowledge, Arc::new(KeywordScorer))
    }

    /// Builds a retriever with a custom scoring strategy.
    #[must_use]
    pub fn with_scorer(knowledge: Arc<KnowledgeBase>, scorer: Arc<dyn RelevanceScorer>) -> Self {
        Self { knowledge, scorer }
    }

    /// Returns up to `k` chunks ranked by non-increasing score.
    ///
    /// An empty corpus yields an empty vec; `k` beyond the corpus size
    /// yields the whole corpus. Only I/O trouble during the one-time corpus
    /// load is an error.
    pub fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Chunk>, CorpusError> {
        let chunks = self.knowledge.chunks()?;
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let mut ranked: Vec<(&Chunk, f32)> = chunks
            .iter()
            .map(|chunk| (chunk, self.scorer.score(query, &chunk.text)))
            .collect();
        // Stable sort: ties keep corpus order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Ok(ranked
            .into_iter()
            .take(k)
            .map(|(chunk, _)| chunk.clone())
            .collect())
    }
}
