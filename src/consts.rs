//! # Constants
//!
//! Fixed parameters of the wire format and defaults for the I/O layer.

/// AES block size in bytes. Also the length of the initialization vector
/// that prefixes every ciphertext stream.
pub const BLOCK_SIZE: usize = 16;

/// Key length for AES-128-CBC.
pub const AES128_KEY_LEN: usize = 16;

/// Key length for AES-256-CBC.
pub const AES256_KEY_LEN: usize = 32;

/// Default chunk size for the stream transfer loop: 1 MiB.
///
/// Purely an I/O granularity knob — any non-zero multiple of [`BLOCK_SIZE`]
/// produces byte-identical output. See
/// [`CipherEngine::with_chunk_size`](crate::CipherEngine::with_chunk_size).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Suffix appended to encrypted files when no destination name is given.
pub const ENCRYPTED_SUFFIX: &str = ".enc";

/// Suffix appended on decrypt when the source name does not end in
/// [`ENCRYPTED_SUFFIX`].
pub const DECRYPTED_SUFFIX: &str = ".dec";
