//! File store errors.

use std::io;
use std::path::PathBuf;

/// Error returned when the preference file cannot be read or written.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read preferences from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("preferences file {path} is not a JSON object of strings: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = StoreError::Read {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }
}
