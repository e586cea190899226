//! # Error Types
//!
//! All operations return [`Result<T, VaultError>`](VaultError). The variants
//! map one-to-one onto the observable failure modes of the engine and the
//! storage layer; nothing is retried internally, since a cryptographic
//! mismatch or a corrupted stream cannot succeed without external correction.

use crate::cipher::CipherAlg;
use thiserror::Error;

/// The error type for all file-vault operations.
#[derive(Error, Debug)]
pub enum VaultError {
    /// The supplied key does not match the cipher's required length.
    ///
    /// Raised at configuration time, before any I/O happens.
    #[error("invalid key length for {cipher}: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        cipher: CipherAlg,
        expected: usize,
        actual: usize,
    },

    /// The source location could not be opened for reading.
    #[error("source unavailable: {0}")]
    SourceUnavailable(#[source] std::io::Error),

    /// The destination location could not be opened for writing.
    #[error("destination unavailable: {0}")]
    DestinationUnavailable(#[source] std::io::Error),

    /// Ciphertext ended before a full initialization vector could be read.
    #[error("ciphertext shorter than one initialization vector")]
    TruncatedInput,

    /// Ciphertext length (after the IV) is not a multiple of the block size.
    #[error("ciphertext length is not block-aligned")]
    MalformedCiphertext,

    /// The final block's PKCS#7 padding is invalid.
    ///
    /// Typically indicates a wrong key/cipher or corrupted data.
    #[error("invalid padding in final block")]
    PaddingError,

    /// A write to the destination stream failed mid-operation.
    ///
    /// The destination may contain partial ciphertext or plaintext; cleanup
    /// is the caller's responsibility.
    #[error("write to destination failed: {0}")]
    WriteFailure(#[source] std::io::Error),

    /// A read from the source stream failed mid-operation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The operating system RNG failed to produce random bytes.
    #[error("system RNG failure: {0}")]
    Rng(String),

    /// The operation was cancelled between chunk iterations.
    #[error("operation cancelled")]
    Cancelled,
}
