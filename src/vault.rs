//! # FileVault facade
//!
//! Named-location operations layered on the pure cipher engine: resolve
//! source and destination through a [`StorageDisk`], run the streaming
//! transform, and optionally remove the source afterwards. Default
//! destination names follow the `.enc` convention of the on-disk format.

use crate::cipher::CipherConfig;
use crate::consts::{DECRYPTED_SUFFIX, ENCRYPTED_SUFFIX};
use crate::engine::CipherEngine;
use crate::error::VaultError;
use crate::storage::StorageDisk;
use std::io::Write;
use tracing::{debug, warn};

/// Outcome of a successful named-location transform.
///
/// Source deletion is attempted only after the transform has succeeded, and
/// a deletion failure never converts that success into a failure — it is
/// carried here instead, for the caller to surface.
#[derive(Debug)]
pub struct TransferReport {
    /// Location the output was written to.
    pub destination: String,
    /// Whether the source was removed afterwards.
    pub source_deleted: bool,
    /// Set when deletion was requested but failed.
    pub delete_error: Option<std::io::Error>,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Encrypts and decrypts files resolved through a storage backend.
///
/// ```no_run
/// use filevault_rs::{CipherAlg, CipherConfig, FileVault, LocalDisk, generate_key};
/// # fn main() -> Result<(), filevault_rs::VaultError> {
/// let key = generate_key(CipherAlg::Aes256Cbc)?;
/// let vault = FileVault::new(
///     LocalDisk::new("/var/data"),
///     CipherConfig::new(&key, CipherAlg::Aes256Cbc)?,
/// );
///
/// // Writes /var/data/report.pdf.enc and removes the original.
/// let report = vault.encrypt("report.pdf", None)?;
/// assert_eq!(report.destination, "report.pdf.enc");
/// # Ok(())
/// # }
/// ```
pub struct FileVault<D: StorageDisk> {
    disk: D,
    engine: CipherEngine,
}

impl<D: StorageDisk> FileVault<D> {
    /// Creates a vault with default engine settings.
    pub fn new(disk: D, config: CipherConfig) -> Self {
        Self {
            disk,
            engine: CipherEngine::new(config),
        }
    }

    /// Creates a vault around a pre-configured engine (custom chunk size,
    /// cancellation token).
    pub fn with_engine(disk: D, engine: CipherEngine) -> Self {
        Self { disk, engine }
    }

    pub fn disk(&self) -> &D {
        &self.disk
    }

    pub fn engine(&self) -> &CipherEngine {
        &self.engine
    }

    /// Encrypts `source` into `dest` (default: `"{source}.enc"`), removing
    /// the source after success.
    pub fn encrypt(&self, source: &str, dest: Option<&str>) -> Result<TransferReport, VaultError> {
        let dest = dest.map_or_else(|| format!("{source}{ENCRYPTED_SUFFIX}"), str::to_owned);
        self.run(Direction::Encrypt, source, dest, true)
    }

    /// Like [`encrypt`](Self::encrypt), but keeps the source file.
    pub fn encrypt_copy(
        &self,
        source: &str,
        dest: Option<&str>,
    ) -> Result<TransferReport, VaultError> {
        let dest = dest.map_or_else(|| format!("{source}{ENCRYPTED_SUFFIX}"), str::to_owned);
        self.run(Direction::Encrypt, source, dest, false)
    }

    /// Decrypts `source` into `dest`, removing the source after success.
    ///
    /// The default destination strips a trailing `.enc` from the source
    /// name, or appends `.dec` when there is none to strip.
    pub fn decrypt(&self, source: &str, dest: Option<&str>) -> Result<TransferReport, VaultError> {
        let dest = dest.map_or_else(|| default_decrypt_name(source), str::to_owned);
        self.run(Direction::Decrypt, source, dest, true)
    }

    /// Like [`decrypt`](Self::decrypt), but keeps the source file.
    pub fn decrypt_copy(
        &self,
        source: &str,
        dest: Option<&str>,
    ) -> Result<TransferReport, VaultError> {
        let dest = dest.map_or_else(|| default_decrypt_name(source), str::to_owned);
        self.run(Direction::Decrypt, source, dest, false)
    }

    /// Decrypts `source` into an already-open live sink.
    ///
    /// The sink is only appended to — never seeked, truncated, or reopened —
    /// so an HTTP response body or any other forward-only writer works. The
    /// source is never deleted.
    pub fn stream_decrypt<W: Write>(&self, source: &str, sink: W) -> Result<(), VaultError> {
        debug!(source, "stream_decrypt");
        let reader = self.disk.open_read(source)?;
        self.engine.decrypt(reader, sink)
    }

    fn run(
        &self,
        direction: Direction,
        source: &str,
        dest: String,
        delete_source: bool,
    ) -> Result<TransferReport, VaultError> {
        debug!(op = direction.label(), source, dest = %dest, "vault transfer");

        let reader = self.disk.open_read(source)?;
        let writer = self.disk.open_write(&dest)?;

        match direction {
            Direction::Encrypt => self.engine.encrypt(reader, writer)?,
            Direction::Decrypt => self.engine.decrypt(reader, writer)?,
        }

        let mut report = TransferReport {
            destination: dest,
            source_deleted: false,
            delete_error: None,
        };

        if delete_source {
            match self.disk.delete(source) {
                Ok(()) => report.source_deleted = true,
                Err(e) => {
                    warn!(source, error = %e, "source deletion failed after successful transfer");
                    report.delete_error = Some(e);
                }
            }
        }

        Ok(report)
    }
}

fn default_decrypt_name(source: &str) -> String {
    source
        .strip_suffix(ENCRYPTED_SUFFIX)
        .map_or_else(|| format!("{source}{DECRYPTED_SUFFIX}"), str::to_owned)
}
