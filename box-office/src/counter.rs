//! Ticket sequence
//!
//! Monotonic local numbering used only when the service does not assign a
//! ticket identifier. The service id is authoritative whenever present.
//! File-backed in production so the sequence survives restarts; in-memory
//! for tests and ephemeral kiosks.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Source of fallback ticket numbers.
pub trait TicketSequence: Send + Sync {
    /// Next sequence number, monotonically increasing.
    fn next(&self) -> Result<u64, SequenceError>;
}

/// Fallback ticket identifier for a sequence number.
pub fn fallback_ticket_id(n: u64) -> String {
    format!("MQ-{n:06}")
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SequenceFile {
    last_issued: u64,
}

/// Sequence persisted as JSON under the data directory:
/// `{data_dir}/tickets/sequence.json`
pub struct FileTicketSequence {
    file_path: PathBuf,
    state: Mutex<SequenceFile>,
}

impl FileTicketSequence {
    /// Load the persisted sequence, starting fresh when no file exists.
    pub fn load(data_dir: &Path) -> Result<Self, SequenceError> {
        let file_path = data_dir.join("tickets/sequence.json");

        let state = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            SequenceFile::default()
        };

        Ok(Self {
            file_path,
            state: Mutex::new(state),
        })
    }

    fn save(&self, state: &SequenceFile) -> Result<(), SequenceError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.file_path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }
}

impl TicketSequence for FileTicketSequence {
    fn next(&self) -> Result<u64, SequenceError> {
        let mut state = self.state.lock().expect("sequence lock poisoned");
        state.last_issued += 1;
        self.save(&state)?;

        tracing::debug!(n = state.last_issued, "Issued local ticket number");
        Ok(state.last_issued)
    }
}

/// Volatile sequence.
#[derive(Debug, Default)]
pub struct MemoryTicketSequence {
    last_issued: AtomicU64,
}

impl TicketSequence for MemoryTicketSequence {
    fn next(&self) -> Result<u64, SequenceError> {
        Ok(self.last_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
