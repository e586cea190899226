// src/utils.rs

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;
use crate::error::VaultError;
use std::io::{ErrorKind, Read};

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions: XOR-then-encrypt on the way in,
/// decrypt-then-XOR on the way out.
///
/// # Panics (by contract)
///
/// Panics if any of `block_a`, `block_b`, or `output` is shorter than 16
/// bytes. All callers pass exact-size block slices, so these conditions are
/// never hit in correct usage.
#[inline(always)]
pub(crate) const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Reads from `source` until `buf` is full or the stream is exhausted.
///
/// Returns the number of bytes read. A return value smaller than `buf.len()`
/// means end-of-input — the stream loops rely on this to detect the final
/// chunk, so short reads from the underlying reader must not leak through.
/// `ErrorKind::Interrupted` is retried.
pub(crate) fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize, VaultError> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(VaultError::Io(e)),
        }
    }
    Ok(filled)
}

/// Applies PKCS#7 padding to the final `len` plaintext bytes in `buf`.
///
/// Returns the padded length, always a non-zero multiple of the block size
/// and at most `len + BLOCK_SIZE`. The pad value is `16 - len % 16`, so an
/// already block-aligned input (including the empty input) gains a full
/// padding block.
#[inline]
pub(crate) fn pad_final_chunk(buf: &mut [u8], len: usize) -> usize {
    let pad = BLOCK_SIZE - len % BLOCK_SIZE;
    buf[len..len + pad].fill(pad as u8);
    len + pad
}

/// Validates and strips PKCS#7 padding from a decrypted final chunk.
///
/// `chunk` must be non-empty and block-aligned (the decrypt loop guarantees
/// both). Returns the unpadded length, or [`VaultError::PaddingError`] if the
/// tail is not a valid pattern: pad value in `1..=16` and every one of the
/// last `pad` bytes equal to it.
pub(crate) fn strip_pkcs7(chunk: &[u8]) -> Result<usize, VaultError> {
    debug_assert!(!chunk.is_empty() && chunk.len() % BLOCK_SIZE == 0);

    let pad = *chunk.last().ok_or(VaultError::PaddingError)? as usize;
    if pad == 0 || pad > BLOCK_SIZE {
        return Err(VaultError::PaddingError);
    }
    let body = chunk.len() - pad;
    if chunk[body..].iter().any(|&b| b as usize != pad) {
        return Err(VaultError::PaddingError);
    }
    Ok(body)
}
