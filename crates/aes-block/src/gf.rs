//! Arithmetic in GF(2^8) under the AES reduction polynomial.

/// Reduction polynomial x^8 + x^4 + x^3 + x + 1.
pub const MODULUS: u16 = 0x011b;

/// Multiplies two field elements.
///
/// The operands are first multiplied as plain polynomials over GF(2)
/// (shift-and-add into a 16-bit accumulator), then the product is reduced by
/// long division against [`MODULUS`].
pub const fn multiply(a: u8, b: u8) -> u8 {
    let mut addend = a as u16;
    let mut bits = b;
    let mut product: u16 = 0;
    while bits != 0 {
        if bits & 1 != 0 {
            product ^= addend;
        }
        addend <<= 1;
        bits >>= 1;
    }

    // Leading term of the modulus stays aligned under the test bit.
    let mut test_bit: u16 = 0x8000;
    let mut shifted_modulus: u16 = MODULUS << 7;
    while product >= 0x0100 {
        if product & test_bit != 0 {
            product ^= shifted_modulus;
        }
        test_bit >>= 1;
        shifted_modulus >>= 1;
    }

    product as u8
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
pub const fn inverse(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exponent = 254u8;
    while exponent != 0 {
        if exponent & 1 != 0 {
            result = multiply(result, base);
        }
        base = multiply(base, base);
        exponent >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn multiply_matches_fips_examples() {
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x57, 0x13), 0xfe);
        assert_eq!(multiply(0xf1, 0x03), 0x08);
        assert_eq!(multiply(0x02, 0x80), 0x1b);
    }

    #[test]
    fn multiply_is_commutative() {
        for a in 0..=255u8 {
            for b in a..=255u8 {
                assert_eq!(multiply(a, b), multiply(b, a), "a={a:#04x} b={b:#04x}");
            }
        }
    }

    #[test]
    fn zero_and_one() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 0), 0);
            assert_eq!(multiply(a, 1), a);
        }
    }

    #[test]
    fn multiply_distributes_over_xor() {
        let mut rng = rand::thread_rng();
        for _ in 0..2000 {
            let (a, b, c): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
            assert_eq!(multiply(a, b ^ c), multiply(a, b) ^ multiply(a, c));
        }
    }

    #[test]
    fn inverse_round_trips() {
        assert_eq!(inverse(0), 0);
        assert_eq!(inverse(1), 1);
        assert_eq!(inverse(0x53), 0xca);
        for a in 1..=255u8 {
            assert_eq!(multiply(a, inverse(a)), 1, "a={a:#04x}");
        }
    }
}
