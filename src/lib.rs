//! ```text
//! seeds dir (*.txt) ──► corpus::KnowledgeBase ──► cached Chunk list
//!                                                      │
//! query ──► retrieval::Retriever (KeywordScorer) ──► top-k hits
//!                                                      │
//!                     ┌────────────────────────────────┴──────────────┐
//!                     ▼                                               ▼
//!          synthesis::synthesize_answer                synthesis::render_roadmap
//!                     │                                               │
//!                     ▼                                               │
//!          polish::Polisher (best effort, fails open)                 │
//!                     │                                               │
//!                     └──────────────► server (axum) ◄────────────────┘
//! ```
//!
//! Local retrieval plus deterministic synthesis for a demo career-guidance
//! backend. The corpus is loaded once per process; retrieval and synthesis
//! are pure; the optional LLM polish pass can only ever improve phrasing,
//! never change whether an answer is produced.

pub mod config;
pub mod corpus;
pub mod message;
pub mod polish;
pub mod profile;
pub mod retrieval;
pub mod server;
pub mod service;
pub mod synthesis;

pub use corpus::{Chunk, KnowledgeBase};
pub use message::Message;
pub use profile::Profile;
pub use retrieval::Retriever;
pub use service::GuidanceService;
