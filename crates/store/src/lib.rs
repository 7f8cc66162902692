//! Best-score persistence.
//!
//! The core never touches storage. This crate keeps a single integer in a small
//! JSON file:
//!
//! ```json
//! {"best_score": 20480}
//! ```
//!
//! Reading is forgiving. A missing file, malformed JSON, or a value that is
//! negative, fractional or non-numeric all decode as 0 and never abort play.
//! Numeric strings (`"1234"`) are accepted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("best score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("encoding best score: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct BestScoreFile {
    best_score: u64,
}

/// Decode a persisted best score, normalizing anything unusable to 0.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tui_2048_store::decode_best_score;
///
/// assert_eq!(decode_best_score(&json!(512)), 512);
/// assert_eq!(decode_best_score(&json!("64")), 64);
/// assert_eq!(decode_best_score(&json!(-3)), 0);
/// assert_eq!(decode_best_score(&json!(1.5)), 0);
/// assert_eq!(decode_best_score(&json!("lots")), 0);
/// assert_eq!(decode_best_score(&json!(null)), 0);
/// ```
pub fn decode_best_score(value: &Value) -> u64 {
    accepted_best_score(value).unwrap_or_else(|| {
        warn!("ignoring best score {}, reading it as 0", value);
        0
    })
}

/// A non-negative integer, or a string holding one. Anything else is rejected.
fn accepted_best_score(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Decode the full file contents.
pub fn parse_best_score_file(contents: &str) -> u64 {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(map)) => map.get("best_score").map_or(0, decode_best_score),
        // Bare number or string.
        Ok(other) => decode_best_score(&other),
        Err(e) => {
            warn!("ignoring unreadable best score: {}", e);
            0
        }
    }
}

/// A best-score value backed by a JSON file.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score. Any failure reads as 0.
    pub fn load(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let best = parse_best_score_file(&contents);
                debug!("loaded best score {} from {}", best, self.path.display());
                best
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("cannot read {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the stored best score, creating parent directories as needed.
    pub fn save(&self, best_score: u64) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let json = serde_json::to_string(&BestScoreFile { best_score })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Best score tracked in memory with optional file backing.
#[derive(Debug, Clone)]
pub struct BestScore {
    value: u64,
    store: Option<BestScoreStore>,
}

impl BestScore {
    /// Load from `store`, or start from 0 when persistence is disabled.
    pub fn load(store: Option<BestScoreStore>) -> Self {
        let value = store.as_ref().map_or(0, BestScoreStore::load);
        Self { value, store }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Raise the best score to `score` if it is higher and persist it.
    ///
    /// Returns `Ok(true)` when the best score changed. The in-memory value is
    /// updated even if saving fails.
    pub fn record(&mut self, score: u64) -> Result<bool, StoreError> {
        if score <= self.value {
            return Ok(false);
        }
        self.value = score;
        if let Some(store) = &self.store {
            store.save(score)?;
        }
        Ok(true)
    }
}
