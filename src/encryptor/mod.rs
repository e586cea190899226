// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(&config, source, dest)?` with default stream settings.
//! The chunked loop itself lives in [`stream`].

pub(crate) mod stream;

use crate::cipher::CipherConfig;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::VaultError;
use std::io::{Read, Write};

/// Encrypts `source` into `dest` with the default chunk size.
///
/// Output format: `[16-byte random IV][CBC ciphertext]`, PKCS#7-padded on the
/// final block. Use [`CipherEngine`](crate::CipherEngine) to tune chunk size
/// or attach a cancellation token.
pub fn encrypt<R: Read, W: Write>(
    config: &CipherConfig,
    mut source: R,
    mut dest: W,
) -> Result<(), VaultError> {
    stream::encrypt_stream(config, &mut source, &mut dest, DEFAULT_CHUNK_SIZE, None)
}
