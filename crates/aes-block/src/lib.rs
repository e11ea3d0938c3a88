//! FIPS-197 AES forward cipher over a single 16-byte block.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and the AES S-box.
//! - The four round transformations as standalone functions.
//! - Key expansion for AES-128, AES-192 and AES-256.
//! - Single-block encryption, either by value or in place.
//!
//! There is no mode of operation, padding or decryption. The implementation
//! uses table lookups and is not side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod variant;

pub use crate::block::{block_from_slice, Block, BLOCK_BYTES, BLOCK_WORDS};
pub use crate::cipher::{
    encrypt_block, encrypt_block_in_place, expand_key, rot_word, sub_word, Aes,
};
pub use crate::error::{Error, Result};
pub use crate::gf::{inverse, multiply, MODULUS};
pub use crate::key::{key_from_bytes, KeySchedule};
pub use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
pub use crate::sbox::{derive_sbox, sbox, SBOX};
pub use crate::variant::{Aes128, Aes192, Aes256, Variant};
