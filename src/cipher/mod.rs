//! # Cipher configuration
//!
//! [`CipherAlg`] names the supported ciphers, [`CipherConfig`] binds a key to
//! one of them, and [`generate_key`] produces fresh random key material.
//!
//! Key-length validation happens once, at [`CipherConfig::new`]; everything
//! downstream can rely on the key matching its cipher because the key lives
//! in an enum variant sized for that cipher.

pub(crate) mod context;

use crate::consts::{AES128_KEY_LEN, AES256_KEY_LEN};
use crate::error::VaultError;
use rand::rngs::OsRng;
use rand::TryRngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// The supported cipher suites.
///
/// Mode is fixed to CBC and the block size to 16 bytes; the choice only
/// selects the AES key schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherAlg {
    Aes128Cbc,
    Aes256Cbc,
}

impl CipherAlg {
    /// Required key length in bytes: 16 for AES-128, 32 for AES-256.
    #[inline]
    pub const fn key_len(self) -> usize {
        match self {
            CipherAlg::Aes128Cbc => AES128_KEY_LEN,
            CipherAlg::Aes256Cbc => AES256_KEY_LEN,
        }
    }
}

impl fmt::Display for CipherAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CipherAlg::Aes128Cbc => "AES-128-CBC",
            CipherAlg::Aes256Cbc => "AES-256-CBC",
        })
    }
}

/// Key material, stored at its exact size and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) enum KeyMaterial {
    Aes128([u8; AES128_KEY_LEN]),
    Aes256([u8; AES256_KEY_LEN]),
}

/// An immutable `(key, cipher)` pair.
///
/// Construction is the only place key lengths are checked; a `CipherConfig`
/// that exists is valid. The config is cheap to clone and safe to share
/// across threads — operations never mutate it.
#[derive(Clone)]
pub struct CipherConfig {
    pub(crate) key: KeyMaterial,
}

impl CipherConfig {
    /// Binds `key` to `cipher`, failing with
    /// [`VaultError::InvalidKeyLength`] on any length mismatch.
    pub fn new(key: &[u8], cipher: CipherAlg) -> Result<Self, VaultError> {
        let mismatch = || VaultError::InvalidKeyLength {
            cipher,
            expected: cipher.key_len(),
            actual: key.len(),
        };

        let key = match cipher {
            CipherAlg::Aes128Cbc => KeyMaterial::Aes128(key.try_into().map_err(|_| mismatch())?),
            CipherAlg::Aes256Cbc => KeyMaterial::Aes256(key.try_into().map_err(|_| mismatch())?),
        };
        Ok(Self { key })
    }

    /// The cipher this configuration is bound to.
    #[inline]
    pub fn cipher(&self) -> CipherAlg {
        match self.key {
            KeyMaterial::Aes128(_) => CipherAlg::Aes128Cbc,
            KeyMaterial::Aes256(_) => CipherAlg::Aes256Cbc,
        }
    }
}

impl fmt::Debug for CipherConfig {
    // Never prints key bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherConfig")
            .field("cipher", &self.cipher())
            .finish_non_exhaustive()
    }
}

/// Generates a cryptographically random key of the correct length for
/// `cipher`, from the operating system RNG.
///
/// The returned buffer zeroizes itself on drop.
pub fn generate_key(cipher: CipherAlg) -> Result<Zeroizing<Vec<u8>>, VaultError> {
    let mut key = Zeroizing::new(vec![0u8; cipher.key_len()]);
    OsRng
        .try_fill_bytes(&mut key)
        .map_err(|e| VaultError::Rng(e.to_string()))?;
    Ok(key)
}
