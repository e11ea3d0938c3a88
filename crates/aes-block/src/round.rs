//! AES round transformations.

use crate::block::{column, set_column, xor_column, Block, BLOCK_WORDS};
use crate::gf::multiply;
use crate::sbox::sbox;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut shifted = [0u8; BLOCK_WORDS];
        for (col, slot) in shifted.iter_mut().enumerate() {
            *slot = state[((col + row) % BLOCK_WORDS) * 4 + row];
        }
        for (col, byte) in shifted.into_iter().enumerate() {
            state[col * 4 + row] = byte;
        }
    }
}

fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        multiply(0x02, a0) ^ multiply(0x03, a1) ^ a2 ^ a3,
        a0 ^ multiply(0x02, a1) ^ multiply(0x03, a2) ^ a3,
        a0 ^ a1 ^ multiply(0x02, a2) ^ multiply(0x03, a3),
        multiply(0x03, a0) ^ a1 ^ a2 ^ multiply(0x02, a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..BLOCK_WORDS {
        let mixed = mix_single_column(column(state, col));
        set_column(state, col, mixed);
    }
}

/// Adds (XORs) a round key into the state, one word per column.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &[u32; BLOCK_WORDS]) {
    for (col, word) in round_key.iter().enumerate() {
        xor_column(state, col, *word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays out column words with row 0 in the low byte.
    fn block_of(words: [u32; 4]) -> Block {
        let mut block = [0u8; 16];
        for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        block
    }

    #[test]
    fn shift_rows_vector() {
        let mut state = block_of([0x0c080400, 0x0d090501, 0x0e0a0602, 0x0f0b0703]);
        shift_rows(&mut state);
        assert_eq!(
            state,
            block_of([0x0f0a0500, 0x0c0b0601, 0x0d080702, 0x0e090403])
        );
    }

    #[test]
    fn shift_rows_is_a_permutation() {
        let original: Block = core::array::from_fn(|i| (i as u8) * 17);
        let mut state = original;
        shift_rows(&mut state);
        let mut before = original.to_vec();
        let mut after = state.to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        // Row 0 stays put; four applications restore the state.
        for col in 0..4 {
            assert_eq!(state[col * 4], original[col * 4]);
        }
        for _ in 0..3 {
            shift_rows(&mut state);
        }
        assert_eq!(state, original);
    }

    #[test]
    fn sub_bytes_vector() {
        let mut state = block_of([0xbee33d19, 0x2be2f4a0, 0x2a8dc69a, 0x0848f8e9]);
        sub_bytes(&mut state);
        assert_eq!(
            state,
            block_of([0xae1127d4, 0xf198bfe0, 0xe55db4b8, 0x3052411e])
        );
    }

    #[test]
    fn mix_columns_vector() {
        let mut state = [
            0xd4, 0xbf, 0x5d, 0x30, 0xe0, 0xb4, 0x52, 0xae, 0xb8, 0x41, 0x11, 0xf1, 0x1e, 0x27,
            0x98, 0xe5,
        ];
        mix_columns(&mut state);
        assert_eq!(
            state,
            [
                0x04, 0x66, 0x81, 0xe5, 0xe0, 0xcb, 0x19, 0x9a, 0x48, 0xf8, 0xd3, 0x7a, 0x28, 0x06,
                0x26, 0x4c
            ]
        );
    }

    #[test]
    fn mix_columns_keeps_columns_independent() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        a[0] = 1;
        b[0] = 1;
        b[4] = 0x55;
        mix_columns(&mut a);
        mix_columns(&mut b);
        assert_eq!(a[..4], b[..4]);
        assert_eq!(a[4..8], [0; 4]);
    }

    #[test]
    fn add_round_key_xors_big_endian_words() {
        let mut state = [0u8; 16];
        add_round_key(&mut state, &[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]);
        assert_eq!(
            state,
            [
                0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
                0x4f, 0x3c
            ]
        );
        add_round_key(&mut state, &[0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]);
        assert_eq!(state, [0u8; 16]);
    }
}
