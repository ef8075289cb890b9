//! Binary polynomial division over GF(2).
//!
//! Integers are read as coefficient vectors: bit `i` is the coefficient of
//! `x^i`. Subtraction in GF(2) is XOR, so long division reduces to aligning
//! the divisor under the dividend's leading term and XORing it away.

/// The field's irreducible polynomial, `x^8 + x^4 + x^3 + x + 1` (0x11B).
///
/// Reducing doubled bytes modulo this polynomial defines the GF(2^8)
/// multiplication the round-coefficient sequence is built from.
pub const AES_POLYNOMIAL: u16 = 0b1_0001_1011;

/// Divides `dividend` by `divisor` over GF(2), returning `(quotient,
/// remainder)`.
///
/// A zero dividend yields `(0, 0)` immediately. Panics if `divisor` is zero;
/// in this crate the divisor is always [`AES_POLYNOMIAL`].
///
/// ```
/// use keysched_core::{poly_div_rem, AES_POLYNOMIAL};
///
/// // The canonical xtime overflow: 0x80 doubled, reduced back into the field.
/// assert_eq!(poly_div_rem(0x100, u64::from(AES_POLYNOMIAL)), (1, 0x1B));
/// ```
pub fn poly_div_rem(dividend: u64, divisor: u64) -> (u64, u64) {
    assert!(divisor != 0, "division by zero polynomial");

    let divisor_len = bit_length(divisor);
    let mut quotient = 0u64;
    let mut remainder = dividend;
    while bit_length(remainder) >= divisor_len {
        let shift = bit_length(remainder) - divisor_len;
        quotient |= 1 << shift;
        remainder ^= divisor << shift;
    }
    (quotient, remainder)
}

fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Carry-less multiply, for checking `quotient * divisor + remainder`.
    fn clmul(a: u64, b: u64) -> u64 {
        let mut acc = 0;
        for bit in 0..u64::BITS {
            if (b >> bit) & 1 == 1 {
                acc ^= a << bit;
            }
        }
        acc
    }

    #[test]
    fn reduces_the_xtime_overflow_vector() {
        let (quotient, remainder) = poly_div_rem(0x80 << 1, u64::from(AES_POLYNOMIAL));
        assert_eq!(quotient, 1);
        assert_eq!(remainder, 0x1B);
    }

    #[test]
    fn zero_dividend_terminates_immediately() {
        assert_eq!(poly_div_rem(0, u64::from(AES_POLYNOMIAL)), (0, 0));
    }

    #[test]
    fn short_dividend_is_its_own_remainder() {
        assert_eq!(poly_div_rem(0x1B, u64::from(AES_POLYNOMIAL)), (0, 0x1B));
        assert_eq!(poly_div_rem(0xFF, u64::from(AES_POLYNOMIAL)), (0, 0xFF));
    }

    #[test]
    fn dividing_the_polynomial_by_itself_is_exact() {
        let poly = u64::from(AES_POLYNOMIAL);
        assert_eq!(poly_div_rem(poly, poly), (1, 0));
    }

    #[test]
    fn in_field_doublings_need_no_reduction() {
        for value in [0x01u64, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40] {
            let doubled = value << 1;
            assert_eq!(
                poly_div_rem(doubled, u64::from(AES_POLYNOMIAL)),
                (0, doubled)
            );
        }
    }

    #[test]
    fn quotient_and_remainder_reconstruct_the_dividend() {
        let cases = [
            (0b1_1010_1011u64, 0b1011u64),
            (0x1FE, u64::from(AES_POLYNOMIAL)),
            (0xFFFF, 0x11B),
            (0x1_0000_0001, 0x8D),
        ];
        for (dividend, divisor) in cases {
            let (quotient, remainder) = poly_div_rem(dividend, divisor);
            assert_eq!(clmul(quotient, divisor) ^ remainder, dividend);
            assert!(remainder.leading_zeros() > divisor.leading_zeros());
        }
    }

    #[test]
    #[should_panic(expected = "division by zero polynomial")]
    fn zero_divisor_panics() {
        poly_div_rem(0x1B, 0);
    }
}
