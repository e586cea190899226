//! src/decryptor/stream.rs
//! Chunked CBC decryption with a one-chunk output lag.
//!
//! Padding can only be stripped from the last block, and the loop cannot know
//! a chunk is last until the next read comes back empty. Decrypted output is
//! therefore held back by exactly one chunk: a chunk is written only once the
//! following read proves more ciphertext exists, and whatever is still
//! pending at end-of-input is the final chunk, unpadded before the last
//! write. Without the lag, padding-valued plaintext bytes at an intermediate
//! chunk boundary would be wrongly stripped.

use crate::cipher::context::CbcDecrypter;
use crate::cipher::CipherConfig;
use crate::consts::BLOCK_SIZE;
use crate::engine::CancelToken;
use crate::error::VaultError;
use crate::utils::{read_full, strip_pkcs7};
use std::io::{Read, Write};

/// Decrypts the `source` stream into `dest`.
///
/// The first 16 bytes of `source` are consumed as the IV, uninterpreted and
/// never decrypted. Zero ciphertext after the IV yields an empty plaintext
/// stream; any non-block-aligned remainder fails with
/// [`VaultError::MalformedCiphertext`].
pub(crate) fn decrypt_stream<R, W>(
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
    debug_assert!(chunk_size != 0 && chunk_size % BLOCK_SIZE == 0);

    let mut iv = [0u8; BLOCK_SIZE];
    if read_full(source, &mut iv)? < BLOCK_SIZE {
        return Err(VaultError::TruncatedInput);
    }

    let mut cbc = CbcDecrypter::new(config, &iv);

    let mut current = vec![0u8; chunk_size];
    let mut pending = vec![0u8; chunk_size];
    let mut pending_len: Option<usize> = None;

    loop {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(VaultError::Cancelled);
        }

        let n = read_full(source, &mut current)?;
        if n == 0 {
            break;
        }
        if n % BLOCK_SIZE != 0 {
            return Err(VaultError::MalformedCiphertext);
        }

        cbc.process(&mut current[..n]);

        // The newly read chunk proves the pending one was not final.
        if let Some(len) = pending_len {
            dest.write_all(&pending[..len])
                .map_err(VaultError::WriteFailure)?;
        }
        std::mem::swap(&mut current, &mut pending);
        pending_len = Some(n);

        if n < chunk_size {
            // Short read means end-of-input; skip the redundant empty read.
            break;
        }
    }

    if let Some(len) = pending_len {
        let body = strip_pkcs7(&pending[..len])?;
        dest.write_all(&pending[..body])
            .map_err(VaultError::WriteFailure)?;
    }

    dest.flush().map_err(VaultError::WriteFailure)?;
    Ok(())
}
