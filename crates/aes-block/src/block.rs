//! Block representation helpers.

use crate::error::{Error, Result};

/// Number of bytes in a block.
pub const BLOCK_BYTES: usize = 16;

/// Number of 32-bit words (state columns) in a block.
pub const BLOCK_WORDS: usize = 4;

/// AES block of 16 bytes, column-major: byte `4 * column + row`.
pub type Block = [u8; BLOCK_BYTES];

/// Copies a 16-byte slice into a [`Block`].
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::BlockLength { actual: bytes.len() })
}

/// Returns column `col` of the state.
#[inline]
pub(crate) fn column(state: &Block, col: usize) -> [u8; 4] {
    let idx = col * 4;
    [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]]
}

/// Overwrites column `col` of the state.
#[inline]
pub(crate) fn set_column(state: &mut Block, col: usize, value: [u8; 4]) {
    state[col * 4..col * 4 + 4].copy_from_slice(&value);
}

/// XORs a big-endian word into column `col`.
#[inline]
pub(crate) fn xor_column(state: &mut Block, col: usize, word: u32) {
    for (d, r) in state[col * 4..col * 4 + 4]
        .iter_mut()
        .zip(word.to_be_bytes())
    {
        *d ^= r;
    }
}
