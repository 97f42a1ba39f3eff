//! Flat-file credential store.
//!
//! The store is a single JSON array of `{username, password}` records. It is
//! read in full on every call and rewritten in full on registration; the file
//! is the sole source of truth, no records are cached across requests. A
//! missing or zero-length file means "no records yet".
//!
//! All reads and rewrites go through one async mutex, so two concurrent
//! registrations cannot both observe the same pre-mutation snapshot and lose
//! an update.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// A stored username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub username: String,
    pub password: String,
}

/// Outcome of a registration attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Store {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ordered record list.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, or holds
    /// malformed JSON.
    pub async fn records(&self) -> Result<Vec<Record>> {
        let _guard = self.lock.lock().await;

        self.read_records().await
    }

    /// Register a new record, rewriting the whole store file.
    ///
    /// Username uniqueness is checked by linear scan before appending; an
    /// existing username leaves the store untouched. The file is created if
    /// absent.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or rewritten.
    pub async fn register(&self, record: Record) -> Result<RegisterOutcome> {
        let _guard = self.lock.lock().await;

        let mut records = self.read_records().await?;

        if records.iter().any(|r| r.username == record.username) {
            debug!("username {} already registered", record.username);

            return Ok(RegisterOutcome::AlreadyExists);
        }

        records.push(record);

        let data = serde_json::to_string(&records).context("Error serializing records")?;

        fs::write(&self.path, data).await.with_context(|| {
            format!("Error writing credential store {}", self.path.display())
        })?;

        Ok(RegisterOutcome::Created)
    }

    // Missing file and zero-length file both mean an empty store.
    async fn read_records(&self) -> Result<Vec<Record>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Error reading credential store {}", self.path.display())
                })
            }
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).with_context(|| {
            format!("Error parsing credential store {}", self.path.display())
        })
    }
}
