//! Reading source files into a scanner-ready buffer.
//!
//! The buffer is rebuilt line by line with a `\n` after every line, so the
//! scanner only ever sees `\n` line endings and a file's last line is always
//! terminated.

use std::io;
use std::path::{Path, PathBuf};

/// Failure reading a source file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidData { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path },
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => ReadError::InvalidData { path },
            _ => ReadError::Io { path, source: err },
        }
    }
}

/// Read a file and normalize it with [`normalize_lines`].
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ReadError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read source");
    Ok(normalize_lines(&content))
}

/// Rebuild `text` with a `\n` after every line.
///
/// Accepts `\n` and `\r\n` line endings. Empty input stays empty.
pub fn normalize_lines(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len() + 1);
    for line in text.lines() {
        buffer.push_str(line);
        buffer.push('\n');
    }
    buffer
}
