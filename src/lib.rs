// src/lib.rs

//! # filevault-rs
//!
//! Streaming AES-CBC encryption of files at rest.
//!
//! Data moves between a source stream and a destination stream one chunk at
//! a time, so neither side is ever fully resident in memory. The on-disk
//! format is the bare legacy layout:
//!
//! ```text
//! [16-byte IV][CBC ciphertext, PKCS#7 padding on the final block]
//! ```
//!
//! No magic bytes, no embedded cipher identifier, and — deliberately — no
//! MAC or AEAD tag: the format stays bit-compatible with existing encrypted
//! files, which means it offers confidentiality only. The consumer must
//! already know which cipher and key to use, and must not treat successful
//! decryption as proof of integrity.
//!
//! ## Layers
//!
//! - [`encrypt`] / [`decrypt`] — one-call transforms between any
//!   `std::io::Read` and `std::io::Write`.
//! - [`CipherEngine`] — the same transforms with a configurable chunk size
//!   and a [`CancelToken`] checked between chunks.
//! - [`FileVault`] — named-location operations over a [`StorageDisk`]
//!   backend, with `.enc` naming conventions and post-success source
//!   deletion.
//!
//! ## Example
//!
//! ```
//! use filevault_rs::{encrypt, decrypt, generate_key, CipherAlg, CipherConfig};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), filevault_rs::VaultError> {
//! let key = generate_key(CipherAlg::Aes256Cbc)?;
//! let config = CipherConfig::new(&key, CipherAlg::Aes256Cbc)?;
//!
//! let mut ciphertext = Vec::new();
//! encrypt(&config, Cursor::new(b"attack at dawn"), &mut ciphertext)?;
//!
//! let mut plaintext = Vec::new();
//! decrypt(&config, Cursor::new(&ciphertext), &mut plaintext)?;
//! assert_eq!(plaintext, b"attack at dawn");
//! # Ok(())
//! # }
//! ```

pub mod cipher;
pub mod consts;
pub mod decryptor;
pub mod encryptor;
pub mod engine;
pub mod error;
pub mod storage;
pub mod vault;

pub(crate) mod utils;

// High-level API — this is what most users import.
pub use cipher::{generate_key, CipherAlg, CipherConfig};
pub use decryptor::decrypt;
pub use encryptor::encrypt;
pub use engine::{CancelToken, CipherEngine};
pub use error::VaultError;
pub use storage::{LocalDisk, StorageDisk};
pub use vault::{FileVault, TransferReport};
