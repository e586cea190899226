//! tests/common.rs
//! Shared constants and helpers for the integration tests.

use filevault_rs::{CipherAlg, CipherConfig};

/// All-zero AES-256 key used by the format examples.
#[allow(dead_code)] // Used across multiple test files
pub const ZERO_KEY_256: [u8; 32] = [0u8; 32];

#[allow(dead_code)] // Used across multiple test files
pub fn config_256() -> CipherConfig {
    CipherConfig::new(&[0x42u8; 32], CipherAlg::Aes256Cbc).unwrap()
}

#[allow(dead_code)] // Used across multiple test files
pub fn config_128() -> CipherConfig {
    CipherConfig::new(&[0x42u8; 16], CipherAlg::Aes128Cbc).unwrap()
}

/// Deterministic non-trivial plaintext of a given length.
#[allow(dead_code)] // Used across multiple test files
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
