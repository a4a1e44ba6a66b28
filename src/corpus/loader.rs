//! Load-once knowledge base over a directory of seed text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;

use super::{Chunk, split_into_chunks};

/// File extension the loader picks up from the seeds directory.
const SEED_EXTENSION: &str = "txt";

/// Errors raised while reading seed documents.
///
/// A missing seeds directory is not an error; it yields an empty corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A seed file existed during enumeration but could not be read.
    #[error("failed to read seed file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The seeds directory exists but could not be enumerated.
    #[error("failed to enumerate seeds directory {path}: {source}")]
    DirList {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The in-memory corpus, loaded from disk at most once per process.
///
/// The chunk list is memoized behind a [`OnceLock`]. Two callers racing the
/// first load may both read the directory, but the source data is read-only
/// and the recomputed value identical, so the first writer simply wins and
/// the duplicate work is discarded. There is no invalidation: edits to the
/// seeds directory are not observed until restart.
///
/// # Examples
///
/// ```no_run
/// use pathsmith::corpus::KnowledgeBase;
///
/// let kb = KnowledgeBase::new("data/seeds");
/// let chunks = kb.chunks()?;
/// println!("{} chunks loaded", chunks.len());
/// # Ok::<(), pathsmith::corpus::CorpusError>(())
/// ```
#[derive(Debug)]
pub struct KnowledgeBase {
    seeds_dir: PathBuf,
    cache: OnceLock<Vec<Chunk>>,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new(seeds_dir: impl Into<PathBuf>) -> Self {
        Self {
            seeds_dir: seeds_dir.into(),
            cache: OnceLock::new(),
        }
    }

    /// Directory this knowledge base reads from.
    #[must_use]
    pub fn seeds_dir(&self) -> &Path {
        &self.seeds_dir
    }

    /// Returns the cached corpus, loading it from disk on first call.
    pub fn chunks(&self) -> Result<&[Chunk], CorpusError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }
        let loaded = load_seed_chunks(&self.seeds_dir)?;
        // First writer wins; a racing duplicate load produced the same value.
        Ok(self.cache.get_or_init(|| loaded))
    }
}

/// Reads every `*.txt` file under `seeds_dir` and chunks it.
///
/// Files are visited in sorted name order so chunk ids and tie-breaking in
/// the retriever are deterministic across platforms. A missing directory
/// yields an empty corpus.
fn load_seed_chunks(seeds_dir: &Path) -> Result<Vec<Chunk>, CorpusError> {
    if !seeds_dir.is_dir() {
        tracing::debug!(dir = %seeds_dir.display(), "seeds directory missing; corpus is empty");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(seeds_dir).map_err(|source| CorpusError::DirList {
        path: seeds_dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == SEED_EXTENSION)
        })
        .collect();
    files.sort();

    let mut chunks = Vec::new();
    for path in files {
        let text = fs::read_to_string(&path).map_err(|source| CorpusError::FileRead {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        for (index, piece) in split_into_chunks(&text).into_iter().enumerate() {
            chunks.push(Chunk::new(format!("{file_name}:{index}"), piece));
        }
    }

    tracing::info!(
        dir = %seeds_dir.display(),
        chunk_count = chunks.len(),
        "knowledge base loaded"
    );
    Ok(chunks)
}
