//! Plain-text comment history: one comment per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use stt_engine::CommonPrefixGrouper;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("cannot open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("{path}:{line}: {source}")]
    Read {
        path: String,
        line: usize,
        source: io::Error,
    },
}

/// Read every non-blank line of `path`.
pub fn read_history(path: &Path) -> Result<Vec<String>, HistoryError> {
    let file = File::open(path).map_err(|source| HistoryError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let mut comments = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| HistoryError::Read {
            path: path.display().to_string(),
            line: i + 1,
            source,
        })?;
        if !line.trim().is_empty() {
            comments.push(line);
        }
    }
    Ok(comments)
}

/// A grouper seeded with `baseline`, then the history in `path`.
pub fn load_grouper(path: &Path, baseline: &[String]) -> Result<CommonPrefixGrouper, HistoryError> {
    let mut grouper = CommonPrefixGrouper::with_baseline(baseline);
    grouper.learn_all(read_history(path)?);
    Ok(grouper)
}
