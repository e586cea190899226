// src/cipher/context.rs

//! CBC chaining contexts over the RustCrypto AES block ciphers.
//!
//! CBC is chained by hand (XOR-then-encrypt, decrypt-then-XOR) rather than
//! through a mode crate: the stream loops need to encrypt intermediate chunks
//! without padding while carrying the chaining block across chunk boundaries,
//! and to defer padding removal until end-of-input. Both contexts therefore
//! operate on block-aligned buffers in place and keep the previous ciphertext
//! block as their only state.

use crate::cipher::{CipherConfig, KeyMaterial};
use crate::consts::BLOCK_SIZE;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128Dec, Aes128Enc, Aes256Dec, Aes256Enc, Block as AesBlock};

enum BlockEnc {
    Aes128(Aes128Enc),
    Aes256(Aes256Enc),
}

impl BlockEnc {
    #[inline(always)]
    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            BlockEnc::Aes128(cipher) => cipher.encrypt_block(block),
            BlockEnc::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }
}

enum BlockDec {
    Aes128(Aes128Dec),
    Aes256(Aes256Dec),
}

impl BlockDec {
    #[inline(always)]
    fn decrypt_block(&self, block: &mut AesBlock) {
        match self {
            BlockDec::Aes128(cipher) => cipher.decrypt_block(block),
            BlockDec::Aes256(cipher) => cipher.decrypt_block(block),
        }
    }
}

/// CBC encryption context: block cipher plus the previous ciphertext block.
pub(crate) struct CbcEncrypter {
    cipher: BlockEnc,
    prev: [u8; BLOCK_SIZE],
}

impl CbcEncrypter {
    pub(crate) fn new(config: &CipherConfig, iv: &[u8; BLOCK_SIZE]) -> Self {
        let cipher = match &config.key {
            KeyMaterial::Aes128(key) => BlockEnc::Aes128(Aes128Enc::new(key.into())),
            KeyMaterial::Aes256(key) => BlockEnc::Aes256(Aes256Enc::new(key.into())),
        };
        Self { cipher, prev: *iv }
    }

    /// Encrypts `buf` in place. `buf.len()` must be a multiple of the block
    /// size; the stream loop guarantees this for every chunk it feeds in.
    pub(crate) fn process(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_SIZE, 0);

        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut xored = [0u8; BLOCK_SIZE];
            xor_blocks(chunk, &self.prev, &mut xored);

            let mut block = AesBlock::from(xored);
            self.cipher.encrypt_block(&mut block);

            chunk.copy_from_slice(block.as_slice());
            self.prev.copy_from_slice(chunk);
        }
    }
}

/// CBC decryption context, the mirror image of [`CbcEncrypter`].
pub(crate) struct CbcDecrypter {
    cipher: BlockDec,
    prev: [u8; BLOCK_SIZE],
}

impl CbcDecrypter {
    pub(crate) fn new(config: &CipherConfig, iv: &[u8; BLOCK_SIZE]) -> Self {
        let cipher = match &config.key {
            KeyMaterial::Aes128(key) => BlockDec::Aes128(Aes128Dec::new(key.into())),
            KeyMaterial::Aes256(key) => BlockDec::Aes256(Aes256Dec::new(key.into())),
        };
        Self { cipher, prev: *iv }
    }

    /// Decrypts `buf` in place without touching padding. `buf.len()` must be
    /// a multiple of the block size.
    pub(crate) fn process(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % BLOCK_SIZE, 0);

        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let mut saved = [0u8; BLOCK_SIZE];
            saved.copy_from_slice(chunk);

            let mut block = AesBlock::from(saved);
            self.cipher.decrypt_block(&mut block);

            xor_blocks(block.as_slice(), &self.prev, chunk);
            self.prev = saved;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherAlg;

    #[test]
    fn block_roundtrip_preserves_chaining() {
        let config = CipherConfig::new(&[0x42u8; 32], CipherAlg::Aes256Cbc).unwrap();
        let iv = [7u8; 16];
        let plaintext: Vec<u8> = (0..96u8).collect();

        // Encrypt in one pass, decrypt in three — the chaining state must
        // carry across process() calls identically either way.
        let mut buf = plaintext.clone();
        let mut enc = CbcEncrypter::new(&config, &iv);
        enc.process(&mut buf);
        assert_ne!(buf, plaintext);

        let mut dec = CbcDecrypter::new(&config, &iv);
        dec.process(&mut buf[..32]);
        dec.process(&mut buf[32..48]);
        dec.process(&mut buf[48..]);
        assert_eq!(buf, plaintext);
    }

    #[test]
    fn identical_blocks_chain_to_distinct_ciphertext() {
        let config = CipherConfig::new(&[9u8; 16], CipherAlg::Aes128Cbc).unwrap();
        let mut buf = [0u8; 48];
        let mut enc = CbcEncrypter::new(&config, &[0u8; 16]);
        enc.process(&mut buf);
        assert_ne!(buf[..16], buf[16..32]);
        assert_ne!(buf[16..32], buf[32..48]);
    }
}
