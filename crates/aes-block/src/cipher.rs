//! Key expansion and single-block encryption.

use core::marker::PhantomData;

use tracing::debug;

use crate::block::Block;
use crate::error::Result;
use crate::key::{key_from_bytes, KeySchedule};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;
use crate::variant::Variant;

const RCON: [u32; 10] = [
    0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

struct ScheduleBounds<V>(PhantomData<V>);

impl<V: Variant> ScheduleBounds<V> {
    // Largest round-constant index used is (SCHEDULE_WORDS - 1) / Nk - 1.
    const RCON_FITS: () = assert!(
        (V::SCHEDULE_WORDS - 1) / V::KEY_WORDS <= RCON.len(),
        "round constant table too short for this variant"
    );
}

/// Rotates the bytes of a word left by one: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: u32) -> u32 {
    let [a0, a1, a2, a3] = word.to_be_bytes();
    u32::from_be_bytes([a1, a2, a3, a0])
}

/// Applies the S-box to each byte of a word.
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a cipher key into the full key schedule for `V`.
pub fn expand_key<V: Variant>(key: &V::Key) -> KeySchedule<V> {
    let () =ScheduleBounds::<V>::RCON_FITS;

    let nk = V::KEY_WORDS;
    let mut schedule = V::zero_schedule();
    let w = schedule.as_mut();
    w[..nk].copy_from_slice(key.as_ref());

    for i in nk..w.len() {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    debug!(variant = V::NAME, words = w.len(), "expanded key schedule");
    KeySchedule::from_words(schedule)
}

/// Encrypts one block in place with a pre-expanded key schedule.
pub fn encrypt_block_in_place<V: Variant>(state: &mut Block, schedule: &KeySchedule<V>) {
    add_round_key(state, &schedule.round_key(0));

    for round in 1..V::ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &schedule.round_key(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &schedule.round_key(V::ROUNDS));
}

/// Encrypts a single 16-byte block with a pre-expanded key schedule.
pub fn encrypt_block<V: Variant>(block: &Block, schedule: &KeySchedule<V>) -> Block {
    let mut state = *block;
    encrypt_block_in_place(&mut state, schedule);
    state
}

/// Forward AES cipher holding one expanded key schedule.
///
/// The schedule is computed once at construction and reused for every block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes<V: Variant> {
    schedule: KeySchedule<V>,
}

impl<V: Variant> Aes<V> {
    /// Expands `key` and wraps the resulting schedule.
    pub fn new(key: &V::Key) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Builds a cipher from raw key bytes.
    pub fn from_key_bytes(bytes: &[u8]) -> Result<Self> {
        let key = key_from_bytes::<V>(bytes)?;
        Ok(Self::new(&key))
    }

    /// The expanded key schedule.
    pub fn schedule(&self) -> &KeySchedule<V> {
        &self.schedule
    }

    /// Encrypts `block`, returning the ciphertext.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.schedule)
    }

    /// Encrypts `block` in place.
    pub fn encrypt_block_in_place(&self, block: &mut Block) {
        encrypt_block_in_place(block, &self.schedule)
    }
}

impl<V: Variant> From<KeySchedule<V>> for Aes<V> {
    fn from(schedule: KeySchedule<V>) -> Self {
        Self { schedule }
    }
}
