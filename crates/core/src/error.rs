use std::io;
use std::path::PathBuf;

/// Non-fatal problems met while building a tree. None of these abort a scan;
/// they are reported and the affected entry contributes nothing.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot access '{}': {source}", .path.display())]
    EntryClassification {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot enter directory '{}': {source}", .path.display())]
    DirectoryEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read directory entry: {source}")]
    Listing {
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScanError::EntryClassification { path, .. } | ScanError::DirectoryEntry { path, .. } => {
                Some(path)
            }
            ScanError::Listing { .. } => None,
        }
    }
}

/// Unwrap a walkdir error into the io error behind it.
pub(crate) fn walk_io_error(err: walkdir::Error) -> io::Error {
    let msg = err.to_string();
    err.into_io_error().unwrap_or_else(|| io::Error::other(msg))
}
