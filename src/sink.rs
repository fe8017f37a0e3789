//! # Sink — Appending Search Results to the Output File
//!
//! One sink task per range. It waits on the range's [`SearchHandle`] and, if a
//! value arrives, appends it to the shared output file with a fresh handle
//! opened in create+append mode. Sinks never coordinate with each other: the
//! only guarantee between concurrent writers is the file system's atomic
//! append, so fragments from different ranges land in completion order.
//!
//! I/O failures are reported here and stop only this sink.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::search::SearchHandle;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("can not open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not write result in file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deferred write-back failure, surfaced by syncing before the handle
    /// is dropped.
    #[error("can not close file {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a single sink finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    Written { bytes: usize },
    /// The searcher was stopped; nothing was written.
    Cancelled,
    /// Open, write, or close failed; the error has already been logged.
    Failed,
}

/// Wait for `handle` and append its result to `path`.
pub async fn drain(path: PathBuf, handle: SearchHandle) -> SinkOutcome {
    let range = handle.range();
    let Some(result) = handle.recv().await else {
        debug!(range = %range, "no result, search was cancelled");
        return SinkOutcome::Cancelled;
    };

    match append(&path, &result).await {
        Ok(bytes) => {
            debug!(range = %range, bytes, path = %path.display(), "result appended");
            SinkOutcome::Written { bytes }
        }
        Err(e) => {
            error!(range = %range, error = %e, "failed to store search result");
            SinkOutcome::Failed
        }
    }
}

/// Append `text` to `path` in a single write, creating the file if needed.
/// The data is synced to disk before returning so close-time errors are
/// reported; the handle is dropped on every path.
pub async fn append(path: &Path, text: &str) -> Result<usize, SinkError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let write_err = |source: std::io::Error| SinkError::Write {
        path: path.to_path_buf(),
        source,
    };
    file.write_all(text.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;
    file.sync_all().await.map_err(|source| SinkError::Close {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.len())
}
