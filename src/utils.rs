//! Utility functions used across the library.

/// XORs `src` into `dst`, byte by byte.
///
/// Used by the CBC chaining step for both 8-byte (DES) and 16-byte (AES)
/// blocks. Only `min(dst.len(), src.len())` bytes are touched; every caller
/// passes two blocks of the same cipher, so the lengths always match.
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// Returns `true` when `len` is a non-zero multiple of `block_size`.
#[inline(always)]
pub const fn is_block_aligned(len: usize, block_size: usize) -> bool {
    len != 0 && block_size != 0 && len % block_size == 0
}
