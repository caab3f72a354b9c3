use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::models::{MovieDetails, MovieId};

/// Key of one cached detail record: a movie in a given language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub movie_id: MovieId,
    pub language: String,
}

impl CacheKey {
    pub fn new(movie_id: MovieId, language: impl Into<String>) -> Self {
        Self {
            movie_id,
            language: language.into(),
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.movie_id, self.language)
    }
}

struct CacheState {
    path: PathBuf,
    entries: BTreeMap<String, MovieDetails>,
}

/// Persistent store of normalized movie details
///
/// Entries live in memory and are mirrored to a single JSON file that is
/// rewritten in full on every new key. Entries never expire and are never
/// replaced once written. The lock is held across the file write, so
/// concurrent inserts are applied one at a time.
#[derive(Clone)]
pub struct DetailCache {
    state: Arc<Mutex<CacheState>>,
}

impl DetailCache {
    /// Loads the cache file at `path`, starting empty when it does not exist
    ///
    /// A file that exists but is not a valid key → record JSON object is an error.
    pub async fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No cache file found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            state: Arc::new(Mutex::new(CacheState { path, entries })),
        })
    }

    /// Returns the cached record for `key`, if any
    pub async fn get(&self, key: &CacheKey) -> Option<MovieDetails> {
        let state = self.state.lock().await;
        state.entries.get(&key.to_string()).cloned()
    }

    /// Inserts a record and rewrites the cache file
    ///
    /// If the key is already present the existing record wins and nothing is written.
    pub async fn put(&self, key: &CacheKey, details: &MovieDetails) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let key = key.to_string();

        if state.entries.contains_key(&key) {
            tracing::debug!(key = %key, "Cache entry already present, keeping existing record");
            return Ok(());
        }

        state.entries.insert(key.clone(), details.clone());

        if let Err(e) = persist(&state.path, &state.entries).await {
            // Keep memory and disk in step: a record that never reached the file is dropped.
            state.entries.remove(&key);
            tracing::error!(error = %e, path = %state.path.display(), "Failed to write cache file");
            return Err(e);
        }

        tracing::info!(key = %key, entries = state.entries.len(), "Cached movie details");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.entries.is_empty()
    }
}

/// Writes the full map to a sibling temp file, then renames it over `path`
async fn persist(path: &Path, entries: &BTreeMap<String, MovieDetails>) -> AppResult<()> {
    let json = serde_json::to_vec_pretty(entries)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let written = match tokio::fs::write(&tmp_path, json).await {
        Ok(()) => tokio::fs::rename(&tmp_path, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e.into());
    }
    Ok(())
}
