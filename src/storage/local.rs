// src/storage/local.rs

//! Local filesystem backend.

use crate::error::VaultError;
use crate::storage::StorageDisk;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A [`StorageDisk`] rooted at a directory; locations are paths relative to
/// that root.
#[derive(Clone, Debug)]
pub struct LocalDisk {
    root: PathBuf,
}

impl LocalDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of a location on this disk.
    pub fn path(&self, location: &str) -> PathBuf {
        self.root.join(location)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageDisk for LocalDisk {
    type Reader = File;
    type Writer = BufWriter<File>;

    fn open_read(&self, location: &str) -> Result<Self::Reader, VaultError> {
        let path = self.path(location);
        trace!(path = %path.display(), "open_read");
        File::open(path).map_err(VaultError::SourceUnavailable)
    }

    fn open_write(&self, location: &str) -> Result<Self::Writer, VaultError> {
        let path = self.path(location);
        trace!(path = %path.display(), "open_write");
        File::create(path)
            .map(BufWriter::new)
            .map_err(VaultError::DestinationUnavailable)
    }

    fn delete(&self, location: &str) -> std::io::Result<()> {
        std::fs::remove_file(self.path(location))
    }
}
