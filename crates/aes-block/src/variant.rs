//! Named AES configurations.
//!
//! FIPS-197 fixes the pairing of key length and round count, so both are
//! carried together by one marker type instead of being separate knobs.

use core::fmt::Debug;
use core::hash::Hash;

use crate::block::BLOCK_WORDS;

mod sealed {
    pub trait Sealed {}
}

/// An AES key size together with its round count.
pub trait Variant:
    sealed::Sealed + Copy + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Human-readable name, e.g. `AES-128`.
    const NAME: &'static str;
    /// Key length in 32-bit words (`Nk`).
    const KEY_WORDS: usize;
    /// Number of rounds (`Nr`).
    const ROUNDS: usize;
    /// Key schedule length in words.
    const SCHEDULE_WORDS: usize = BLOCK_WORDS * (Self::ROUNDS + 1);
    /// Key length in bytes.
    const KEY_BYTES: usize = Self::KEY_WORDS * 4;

    /// Cipher key as big-endian words.
    type Key: Copy + Debug + PartialEq + Eq + Send + Sync + AsRef<[u32]> + AsMut<[u32]>;
    /// Backing storage for the expanded key schedule.
    type Schedule: Copy + Debug + PartialEq + Eq + Send + Sync + AsRef<[u32]> + AsMut<[u32]>;

    /// All-zero key storage.
    fn zero_key() -> Self::Key;
    /// All-zero schedule storage.
    fn zero_schedule() -> Self::Schedule;
}

macro_rules! variant {
    ($(#[$doc:meta])* $name:ident, $label:literal, key_words = $nk:literal, rounds = $nr:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl Variant for $name {
            const NAME: &'static str = $label;
            const KEY_WORDS: usize = $nk;
            const ROUNDS: usize = $nr;

            type Key = [u32; $nk];
            type Schedule = [u32; BLOCK_WORDS * ($nr + 1)];

            fn zero_key() -> Self::Key {
                [0; $nk]
            }

            fn zero_schedule() -> Self::Schedule {
                [0; BLOCK_WORDS * ($nr + 1)]
            }
        }
    };
}

variant!(
    /// AES with a 128-bit key and 10 rounds.
    Aes128, "AES-128", key_words = 4, rounds = 10
);
variant!(
    /// AES with a 192-bit key and 12 rounds.
    Aes192, "AES-192", key_words = 6, rounds = 12
);
variant!(
    /// AES with a 256-bit key and 14 rounds.
    Aes256, "AES-256", key_words = 8, rounds = 14
);

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_matches<V: Variant>() {
        assert_eq!(V::zero_key().as_ref().len(), V::KEY_WORDS);
        assert_eq!(V::zero_schedule().as_ref().len(), V::SCHEDULE_WORDS);
    }

    #[test]
    fn fips_pairings() {
        assert_eq!((Aes128::KEY_WORDS, Aes128::ROUNDS), (4, 10));
        assert_eq!((Aes192::KEY_WORDS, Aes192::ROUNDS), (6, 12));
        assert_eq!((Aes256::KEY_WORDS, Aes256::ROUNDS), (8, 14));
        assert_eq!(Aes128::SCHEDULE_WORDS, 44);
        assert_eq!(Aes192::SCHEDULE_WORDS, 52);
        assert_eq!(Aes256::SCHEDULE_WORDS, 60);
        assert_eq!(Aes256::KEY_BYTES, 32);
    }

    #[test]
    fn storage_sizes() {
        storage_matches::<Aes128>();
        storage_matches::<Aes192>();
        storage_matches::<Aes256>();
    }
}
