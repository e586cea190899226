//! src/encryptor/stream.rs
//! Chunked CBC encryption: IV framing plus the stream transfer loop.

use crate::cipher::context::CbcEncrypter;
use crate::cipher::CipherConfig;
use crate::consts::BLOCK_SIZE;
use crate::engine::CancelToken;
use crate::error::VaultError;
use crate::utils::{pad_final_chunk, read_full};
use rand::rngs::OsRng;
use rand::TryRngCore;
use std::io::{Read, Write};

/// Encrypts the `source` stream into `dest`.
///
/// Writes a fresh random IV first, then moves plaintext through the cipher
/// one chunk at a time. Only the final chunk — detected by a short read,
/// which [`read_full`] guarantees means end-of-input — receives PKCS#7
/// padding; intermediate chunks are block-aligned by construction and keep
/// their exact length. Each chunk is written before the next is read, so
/// memory stays bounded by `chunk_size` and backpressure is implicit.
pub(crate) fn encrypt_stream<R, W>(
    config: &CipherConfig,
    source: &mut R,
    dest: &mut W,
    chunk_size: usize,
    cancel: Option<&CancelToken>,
) -> Result<(), VaultError>
where
    R: Read,
    W: Write,
{
    let mut iv = [0u8; BLOCK_SIZE];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| VaultError::Rng(e.to_string()))?;

    encrypt_stream_with_iv(config, source, dest, chunk_size, cancel, &iv)
}

/// Deterministic inner loop: the caller supplies the IV.
///
/// Kept crate-private — reusing an IV under the same key breaks CBC's
/// confidentiality. Split out so unit tests can pin the IV for known-answer
/// and chunk-size-equivalence checks.
pub(crate) fn encrypt_stream_with_iv<R, W>(
    config: &CipherConfig,
    source: &mut R,
    dest: &mut W,
    chunk_size: usize,
    cancel: Option<&CancelToken>,
    iv: &[u8; BLOCK_SIZE],
) -> Result<(), VaultError>
where
    R: Read,
    W: Write,
{
    debug_assert!(chunk_size != 0 && chunk_size % BLOCK_SIZE == 0);

    dest.write_all(iv).map_err(VaultError::WriteFailure)?;

    let mut cbc = CbcEncrypter::new(config, iv);
    // One extra block of headroom for the padding of the final chunk.
    let mut buf = vec![0u8; chunk_size + BLOCK_SIZE];

    loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(VaultError::Cancelled);
        }

        let n = read_full(source, &mut buf[..chunk_size])?;
        let is_final = n < chunk_size;

        let len = if is_final { pad_final_chunk(&mut buf, n) } else { n };
        cbc.process(&mut buf[..len]);
        dest.write_all(&buf[..len]).map_err(VaultError::WriteFailure)?;

        if is_final {
            break;
        }
    }

    dest.flush().map_err(VaultError::WriteFailure)?;
    Ok(())
}
