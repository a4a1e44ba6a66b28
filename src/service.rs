//! Composition root: wires the knowledge base, retriever, synthesizers,
//! and the optional polisher into the two user-facing operations.

use std::sync::Arc;

use thiserror::Error;

use crate::corpus::{CorpusError, KnowledgeBase};
use crate::message::Message;
use crate::polish::Polisher;
use crate::profile::Profile;
use crate::retrieval::{DEFAULT_TOP_K, Retriever};
use crate::synthesis::{render_roadmap, roadmap_query, synthesize_answer};

/// Failures that reach the service boundary. The HTTP layer maps these to
/// fixed user-facing strings; details stay in the logs.
#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// The guidance engine behind both endpoints.
///
/// Owns the single [`KnowledgeBase`] instance (and therefore the process-wide
/// corpus cache) plus the optional polish collaborator. All per-request work
/// is pure computation over the cached corpus.
pub struct GuidanceService {
    retriever: Retriever,
    polisher: Option<Arc<dyn Polisher>>,
}

impl GuidanceService {
    #[must_use]
    pub fn new(knowledge: Arc<KnowledgeBase>, polisher: Option<Arc<dyn Polisher>>) -> Self {
        Self {
            retriever: Retriever::new(knowledge),
            polisher,
        }
    }

    /// Answers a chat request.
    ///
    /// Only the last message's content is used as the retrieval query. The
    /// deterministic answer is always produced; when a polisher is
    /// configured its rewrite replaces the draft, and any polish failure is
    /// logged and swallowed.
    pub async fn answer_chat(
        &self,
        messages: &[Message],
        profile: &Profile,
    ) -> Result<String, GuidanceError> {
        let query = messages
            .last()
            .map(|message| message.content.as_str())
            .unwrap_or("");
        let hits = self.retriever.retrieve(query, DEFAULT_TOP_K)?;
        tracing::debug!(query, hit_count = hits.len(), "chat retrieval complete");
        let draft = synthesize_answer(query, profile, &hits);

        if let Some(polisher) = &self.polisher {
            match polisher.polish(&draft).await {
                Ok(polished) => return Ok(polished),
                Err(err) => {
                    tracing::warn!(error = %err, "polish pass failed; using deterministic answer");
                }
            }
        }
        Ok(draft)
    }

    /// Builds the roadmap for a profile.
    ///
    /// The retriever runs against a profile-derived query; zero hits fall
    /// back to the fixed phase list. The polish pass does not apply here.
    pub fn build_roadmap(&self, profile: &Profile) -> Result<String, GuidanceError> {
        let query = roadmap_query(profile);
        let hits = self.retriever.retrieve(&query, DEFAULT_TOP_K)?;
        tracing::debug!(query, hit_count = hits.len(), "roadmap retrieval complete");
        Ok(render_roadmap(profile, &hits))
    }
}
