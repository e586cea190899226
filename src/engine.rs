//! # Cipher engine
//!
//! [`CipherEngine`] bundles a [`CipherConfig`] with the I/O knobs of the
//! stream transfer loop: chunk size and an optional cancellation token. It
//! has no other state — every operation is independent, synchronous, and
//! re-entrant, so one engine may be shared across threads for use against
//! independent stream pairs.

use crate::cipher::CipherConfig;
use crate::consts::{BLOCK_SIZE, DEFAULT_CHUNK_SIZE};
use crate::error::VaultError;
use crate::{decryptor, encryptor};
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable flag for cancelling an in-flight operation.
///
/// The stream loops check the token between chunk iterations; a cancelled
/// operation fails with [`VaultError::Cancelled`] without reading further.
/// Already-written destination bytes are not rolled back.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent; takes effect at the next chunk
    /// boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The streaming file cipher engine.
///
/// ```no_run
/// use filevault_rs::{CipherAlg, CipherConfig, CipherEngine, generate_key};
/// # fn main() -> Result<(), filevault_rs::VaultError> {
/// let key = generate_key(CipherAlg::Aes256Cbc)?;
/// let engine = CipherEngine::new(CipherConfig::new(&key, CipherAlg::Aes256Cbc)?);
///
/// let source = std::fs::File::open("report.pdf")?;
/// let dest = std::fs::File::create("report.pdf.enc")?;
/// engine.encrypt(source, dest)?;
/// # Ok(())
/// # }
/// ```
pub struct CipherEngine {
    config: CipherConfig,
    chunk_size: usize,
    cancel: Option<CancelToken>,
}

impl CipherEngine {
    /// Creates an engine with the default 1 MiB chunk size and no
    /// cancellation token.
    pub fn new(config: CipherConfig) -> Self {
        Self {
            config,
            chunk_size: DEFAULT_CHUNK_SIZE,
            cancel: None,
        }
    }

    /// Overrides the stream-loop chunk size.
    ///
    /// Chunk size is an I/O granularity parameter only — output bytes are
    /// identical for any valid value.
    ///
    /// # Panics (by contract)
    ///
    /// Panics if `chunk_size` is zero or not a multiple of the 16-byte block
    /// size, which would break chaining continuity across chunk boundaries.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(
            chunk_size != 0 && chunk_size % BLOCK_SIZE == 0,
            "chunk size must be a non-zero multiple of {BLOCK_SIZE}"
        );
        self.chunk_size = chunk_size;
        self
    }

    /// Attaches a cancellation token checked between chunk iterations.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The configuration this engine operates with.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encrypts `source` into `dest`: a fresh random IV followed by the CBC
    /// ciphertext, PKCS#7-padded on the final block.
    pub fn encrypt<R: Read, W: Write>(&self, mut source: R, mut dest: W) -> Result<(), VaultError> {
        encryptor::stream::encrypt_stream(
            &self.config,
            &mut source,
            &mut dest,
            self.chunk_size,
            self.cancel.as_ref(),
        )
    }

    /// Decrypts `source` (IV-prefixed CBC ciphertext) into `dest`.
    ///
    /// `dest` may be any live output sink; the engine only appends and never
    /// seeks, truncates, or reopens it.
    pub fn decrypt<R: Read, W: Write>(&self, mut source: R, mut dest: W) -> Result<(), VaultError> {
        decryptor::stream::decrypt_stream(
            &self.config,
            &mut source,
            &mut dest,
            self.chunk_size,
            self.cancel.as_ref(),
        )
    }
}
