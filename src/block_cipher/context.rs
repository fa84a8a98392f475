//! src/block_cipher/context.rs
//! Per-call CBC state: expanded key schedule plus the running chain register.
//!
//! A context is built, run over one buffer, and dropped inside a single
//! adapter call. `aes` and `des` are compiled with `zeroize`, so the key
//! schedule wipes itself when the context drops; the chain register is wiped
//! here.

use crate::error::PemcryptError;
use crate::utils::{is_block_aligned, xor_in_place};
use cipher::{Block, BlockCipher, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use zeroize::Zeroize;

pub(crate) struct CbcContext<C: BlockCipher> {
    cipher: C,
    chain: Block<C>,
}

impl<C: BlockCipher + KeyInit> CbcContext<C> {
    /// Expand `key` and load the first block of `iv` into the chain register.
    pub(crate) fn new(key: &[u8], iv: &[u8]) -> Result<Self, PemcryptError> {
        let block_size = <C as BlockSizeUser>::block_size();
        if iv.len() < block_size {
            return Err(PemcryptError::InvalidArgument(format!(
                "IV of {} bytes is shorter than the {block_size}-byte block",
                iv.len()
            )));
        }

        let cipher = C::new_from_slice(key)?;
        Ok(Self {
            cipher,
            chain: Block::<C>::clone_from_slice(&iv[..block_size]),
        })
    }
}

impl<C: BlockCipher + BlockEncrypt> CbcContext<C> {
    /// Buffer must already be block-aligned.
    pub(crate) fn encrypt_in_place(&mut self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_exact_mut(<C as BlockSizeUser>::block_size()) {
            let block = Block::<C>::from_mut_slice(chunk);
            xor_in_place(block, &self.chain);
            self.cipher.encrypt_block(block);
            self.chain.copy_from_slice(block);
        }
    }
}

impl<C: BlockCipher + BlockDecrypt> CbcContext<C> {
    /// Buffer must already be block-aligned.
    pub(crate) fn decrypt_in_place(&mut self, buffer: &mut [u8]) {
        for chunk in buffer.chunks_exact_mut(<C as BlockSizeUser>::block_size()) {
            let block = Block::<C>::from_mut_slice(chunk);
            let ciphertext = block.clone();
            self.cipher.decrypt_block(block);
            xor_in_place(block, &self.chain);
            self.chain = ciphertext;
        }
    }
}

impl<C: BlockCipher> Drop for CbcContext<C> {
    fn drop(&mut self) {
        self.chain.as_mut_slice().zeroize();
    }
}

/// Reject a buffer the cipher cannot chain over, before anything is touched.
pub(crate) fn check_alignment(len: usize, block_size: usize) -> Result<(), PemcryptError> {
    if is_block_aligned(len, block_size) {
        Ok(())
    } else {
        Err(PemcryptError::Alignment { len, block_size })
    }
}

/// One-shot CBC encryption with a raw key.
pub(crate) fn cbc_encrypt<C>(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<(), PemcryptError>
where
    C: BlockCipher + BlockEncrypt + KeyInit,
{
    check_alignment(buffer.len(), <C as BlockSizeUser>::block_size())?;
    let mut ctx = CbcContext::<C>::new(key, iv)?;
    ctx.encrypt_in_place(buffer);
    Ok(())
}

/// One-shot CBC decryption with a raw key.
pub(crate) fn cbc_decrypt<C>(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<(), PemcryptError>
where
    C: BlockCipher + BlockDecrypt + KeyInit,
{
    check_alignment(buffer.len(), <C as BlockSizeUser>::block_size())?;
    let mut ctx = CbcContext::<C>::new(key, iv)?;
    ctx.decrypt_in_place(buffer);
    Ok(())
}
