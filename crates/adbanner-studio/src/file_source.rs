//! Copy source that replays service output saved to disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use adbanner_copy::{CopyError, CopyRequest, CopySource};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CopySource for FileSource {
    fn fetch(&self, request: &CopyRequest) -> Result<String, CopyError> {
        log::debug!("reading copy for {:?} from {}", request.topic, self.path.display());
        fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            // Another process may still be writing the file.
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock => CopyError::Transport(err.to_string()),
            _ => CopyError::Provider(format!("{}: {err}", self.path.display())),
        })
    }
}
