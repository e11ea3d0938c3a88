//! Encrypts the FIPS-197 Appendix B block and checks the published ciphertext.

use aes_block::{block_from_slice, encrypt_block, expand_key, key_from_bytes, Aes128};

fn main() -> Result<(), aes_block::Error> {
    let key = key_from_bytes::<Aes128>(&[
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ])?;
    let plaintext = block_from_slice(&[
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ])?;

    let schedule = expand_key::<Aes128>(&key);
    let ciphertext = encrypt_block(&plaintext, &schedule);

    assert_eq!(
        ciphertext,
        [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32
        ]
    );
    println!("example succeeded; ciphertext matches FIPS-197 appendix B");
    Ok(())
}
