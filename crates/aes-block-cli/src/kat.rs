//! FIPS-197 known-answer checks.

use aes_block::{
    block_from_slice, derive_sbox, encrypt_block, expand_key, key_from_bytes, multiply,
    shift_rows, sub_bytes, Aes128, Aes192, Aes256, Block, Variant, SBOX,
};
use anyhow::{Context, Result};

/// Result of one known-answer case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Case name.
    pub name: &'static str,
    /// Expected value, hex encoded.
    pub expected: String,
    /// Computed value, hex encoded.
    pub actual: String,
}

impl Outcome {
    fn new(name: &'static str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            name,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether the computed value matches.
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

const APPENDIX_C_PLAIN: &str = "00112233445566778899aabbccddeeff";

/// Runs every case and returns the outcomes in a fixed order.
pub fn run_all() -> Result<Vec<Outcome>> {
    let mut outcomes = vec![
        Outcome::new("gf multiply 57*83", "c1", format!("{:02x}", multiply(0x57, 0x83))),
        Outcome::new("gf multiply f1*03", "08", format!("{:02x}", multiply(0xf1, 0x03))),
        Outcome::new(
            "sbox derivation",
            hex::encode(SBOX),
            hex::encode(derive_sbox()),
        ),
    ];

    let mut state = block_of_columns([0x0c080400, 0x0d090501, 0x0e0a0602, 0x0f0b0703]);
    shift_rows(&mut state);
    outcomes.push(Outcome::new(
        "shift rows",
        hex::encode(block_of_columns([0x0f0a0500, 0x0c0b0601, 0x0d080702, 0x0e090403])),
        hex::encode(state),
    ));

    let mut state = block_of_columns([0xbee33d19, 0x2be2f4a0, 0x2a8dc69a, 0x0848f8e9]);
    sub_bytes(&mut state);
    outcomes.push(Outcome::new(
        "sub bytes",
        hex::encode(block_of_columns([0xae1127d4, 0xf198bfe0, 0xe55db4b8, 0x3052411e])),
        hex::encode(state),
    ));

    outcomes.push(last_schedule_word::<Aes128>(
        "key expansion aes128",
        "2b7e151628aed2a6abf7158809cf4f3c",
        "b6630ca6",
    )?);
    outcomes.push(last_schedule_word::<Aes192>(
        "key expansion aes192",
        "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        "01002202",
    )?);
    outcomes.push(last_schedule_word::<Aes256>(
        "key expansion aes256",
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        "706c631e",
    )?);

    outcomes.push(encryption::<Aes128>(
        "encrypt appendix b",
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    )?);
    outcomes.push(encryption::<Aes128>(
        "encrypt appendix c.1",
        "000102030405060708090a0b0c0d0e0f",
        APPENDIX_C_PLAIN,
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    )?);
    outcomes.push(encryption::<Aes192>(
        "encrypt appendix c.2",
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        APPENDIX_C_PLAIN,
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    )?);
    outcomes.push(encryption::<Aes256>(
        "encrypt appendix c.3",
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        APPENDIX_C_PLAIN,
        "8ea2b7ca516745bfeafc49904b496089",
    )?);

    Ok(outcomes)
}

/// Builds a block from column words stored row 0 in the low byte.
fn block_of_columns(words: [u32; 4]) -> Block {
    let mut block = [0u8; 16];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    block
}

fn last_schedule_word<V: Variant>(
    name: &'static str,
    key_hex: &str,
    expected: &str,
) -> Result<Outcome> {
    let key = key_from_bytes::<V>(&hex::decode(key_hex).context("decode vector key")?)?;
    let schedule = expand_key::<V>(&key);
    let last = schedule.words().last().copied().unwrap_or_default();
    Ok(Outcome::new(name, expected, format!("{last:08x}")))
}

fn encryption<V: Variant>(
    name: &'static str,
    key_hex: &str,
    plain_hex: &str,
    expected: &str,
) -> Result<Outcome> {
    let key = key_from_bytes::<V>(&hex::decode(key_hex).context("decode vector key")?)?;
    let plain = block_from_slice(&hex::decode(plain_hex).context("decode vector plaintext")?)?;
    let cipher = encrypt_block(&plain, &expand_key::<V>(&key));
    Ok(Outcome::new(name, expected, hex::encode(cipher)))
}
