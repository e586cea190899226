//! # Storage backends
//!
//! The engine never touches a backend directly; it reads and writes
//! `std::io` streams. [`StorageDisk`] is the capability surface that resolves
//! a logical location to those streams, so local filesystems, object stores,
//! or test doubles plug in without any backend-specific branching in the
//! vault.

pub(crate) mod local;

pub use local::LocalDisk;

use crate::error::VaultError;
use std::io::{Read, Write};

/// Resolves logical file locations to byte streams.
///
/// Implementations decide what a location string means (a relative path, an
/// object key, ...). The contract is small on purpose:
///
/// - [`open_read`](Self::open_read) fails with
///   [`VaultError::SourceUnavailable`] when the location cannot be read.
/// - [`open_write`](Self::open_write) creates or truncates as needed and
///   fails with [`VaultError::DestinationUnavailable`].
/// - [`delete`](Self::delete) is the post-success cleanup hook; its failure
///   is reported separately and never invalidates a completed transform.
pub trait StorageDisk {
    type Reader: Read;
    type Writer: Write;

    fn open_read(&self, location: &str) -> Result<Self::Reader, VaultError>;

    fn open_write(&self, location: &str) -> Result<Self::Writer, VaultError>;

    fn delete(&self, location: &str) -> std::io::Result<()>;
}
