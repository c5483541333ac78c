// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::UIntLike;

/// An inclusive `[LSB, MSB]` bit-position range within a register word.
///
/// A `BitSpan` is a pure compile-time descriptor: it carries no runtime state
/// and only exists to compute a field's width and mask. Declaring a span with
/// `LSB > MSB`, or evaluating its mask against a storage type narrower than
/// `MSB + 1` bits, is a compile-time error.
pub struct BitSpan<const LSB: u32, const MSB: u32>;

/// Shorthand for a single-bit span.
pub type Bit<const INDEX: u32> = BitSpan<INDEX, INDEX>;

impl<const LSB: u32, const MSB: u32> BitSpan<LSB, MSB> {
    /// The number of bits covered, inclusive of both ends.
    pub const WIDTH: u32 = {
        assert!(LSB <= MSB, "bit span LSB must not exceed its MSB");
        MSB - LSB + 1
    };

    /// Returns the bit pattern with ones exactly at this span's positions
    /// within a `T`-sized word.
    #[inline]
    pub fn mask<T: UIntLike>() -> T {
        const { assert!(MSB < T::BITS, "bit span MSB is out of range for the storage type") };
        if Self::WIDTH == T::BITS {
            // Shifting by the full width would overflow; the span covers
            // every bit, so the mask is all ones.
            !T::zero()
        } else {
            ((T::one() << Self::WIDTH) - T::one()) << LSB
        }
    }

    /// Whether this span covers every bit of a `T`-sized word. A write to a
    /// field with such a span determines the whole word, so the
    /// read-modify-write read can be skipped.
    #[inline]
    pub fn covers<T: UIntLike>() -> bool {
        const { LSB == 0 && MSB + 1 == T::BITS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width() {
        assert_eq!(BitSpan::<0, 0>::WIDTH, 1);
        assert_eq!(BitSpan::<2, 4>::WIDTH, 3);
        assert_eq!(BitSpan::<0, 31>::WIDTH, 32);
        assert_eq!(Bit::<7>::WIDTH, 1);
    }

    #[test]
    fn mask() {
        assert_eq!(BitSpan::<0, 0>::mask::<u8>(), 0b1);
        assert_eq!(BitSpan::<2, 4>::mask::<u8>(), 0x1C);
        assert_eq!(BitSpan::<4, 11>::mask::<u64>(), 0xFF0);
        assert_eq!(Bit::<7>::mask::<u8>(), 0x80);
    }

    #[test]
    fn full_span_mask_is_all_ones() {
        assert_eq!(BitSpan::<0, 7>::mask::<u8>(), 0xFF);
        assert_eq!(BitSpan::<0, 31>::mask::<u32>(), u32::MAX);
        assert_eq!(BitSpan::<0, 127>::mask::<u128>(), u128::MAX);
    }

    #[test]
    fn covers() {
        assert!(BitSpan::<0, 7>::covers::<u8>());
        assert!(BitSpan::<0, 31>::covers::<u32>());
        assert!(!BitSpan::<0, 6>::covers::<u8>());
        assert!(!BitSpan::<1, 7>::covers::<u8>());
        assert!(!BitSpan::<0, 7>::covers::<u16>());
    }
}
