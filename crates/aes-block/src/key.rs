//! Cipher keys and expanded key schedules.

use crate::block::BLOCK_WORDS;
use crate::error::{Error, Result};
use crate::variant::Variant;

/// Parses raw key bytes into big-endian key words for `V`.
pub fn key_from_bytes<V: Variant>(bytes: &[u8]) -> Result<V::Key> {
    if bytes.len() != V::KEY_BYTES {
        return Err(Error::KeyLength {
            variant: V::NAME,
            expected: V::KEY_BYTES,
            actual: bytes.len(),
        });
    }
    let mut key = V::zero_key();
    for (word, chunk) in key.as_mut().iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(key)
}

/// Expanded key schedule: `4 * (rounds + 1)` words, one round key per round.
///
/// Only [`expand_key`](crate::expand_key) builds one, so a schedule is always
/// fully populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule<V: Variant> {
    words: V::Schedule,
}

impl<V: Variant> KeySchedule<V> {
    pub(crate) fn from_words(words: V::Schedule) -> Self {
        Self { words }
    }

    /// All schedule words in order.
    #[inline]
    pub fn words(&self) -> &[u32] {
        self.words.as_ref()
    }

    /// Returns the round key at the requested index (`0..=V::ROUNDS`).
    ///
    /// # Panics
    ///
    /// Panics if `round` exceeds the variant's round count.
    #[inline]
    pub fn round_key(&self, round: usize) -> [u32; BLOCK_WORDS] {
        let words = &self.words()[round * BLOCK_WORDS..(round + 1) * BLOCK_WORDS];
        core::array::from_fn(|col| words[col])
    }

    /// Number of rounds this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        V::ROUNDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Aes128, Aes192, Aes256};

    #[test]
    fn parses_big_endian_words() {
        let bytes = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let key = key_from_bytes::<Aes128>(&bytes).unwrap();
        assert_eq!(key, [0x2b7e1516, 0x28aed2a6, 0xabf71588, 0x09cf4f3c]);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(
            key_from_bytes::<Aes192>(&[0u8; 16]),
            Err(Error::KeyLength {
                variant: "AES-192",
                expected: 24,
                actual: 16,
            })
        );
        assert!(key_from_bytes::<Aes256>(&[0u8; 32]).is_ok());
        assert!(key_from_bytes::<Aes256>(&[0u8; 33]).is_err());
    }

    #[test]
    fn round_key_slices_schedule() {
        let words: [u32; 44] = core::array::from_fn(|i| i as u32);
        let schedule = KeySchedule::<Aes128>::from_words(words);
        assert_eq!(schedule.round_key(0), [0, 1, 2, 3]);
        assert_eq!(schedule.round_key(10), [40, 41, 42, 43]);
        assert_eq!(schedule.rounds(), 10);
    }
}
