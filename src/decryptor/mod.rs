// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(&config, source, dest)?` with default stream settings.
//! The one-chunk-lag loop lives in [`stream`].

pub(crate) mod stream;

use crate::cipher::CipherConfig;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::VaultError;
use std::io::{Read, Write};

/// Decrypts `source` (IV-prefixed CBC ciphertext) into `dest` with the
/// default chunk size.
///
/// `dest` only needs to support appending writes — decrypting into a live
/// output sink such as a response body works the same as into a file.
pub fn decrypt<R: Read, W: Write>(
    config: &CipherConfig,
    mut source: R,
    mut dest: W,
) -> Result<(), VaultError> {
    stream::decrypt_stream(config, &mut source, &mut dest, DEFAULT_CHUNK_SIZE, None)
}
