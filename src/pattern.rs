// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::UIntLike;

/// A value type that can stand in for a field's bits.
///
/// Field accessors are polymorphic over the value representation: a field can
/// be read or written as an unsigned integer, as [`bool`] (for single-bit
/// fields), or as a fieldless enum deriving
/// [`BitPattern`](regspan_macros::BitPattern). All of them reduce to the same
/// underlying unsigned bit pattern of the register's storage type `T`; the
/// shift/mask arithmetic only ever sees `T`.
pub trait BitPattern<T: UIntLike>: Copy {
    /// The unsigned bit pattern of this value, widened to the storage type.
    fn into_bits(self) -> T;

    /// Reinterprets a (already masked and shifted) bit pattern as `Self`.
    fn from_bits(bits: T) -> Self;
}

macro_rules! int_bit_pattern {
    ($value:ty => $($storage:ty),*) => {$(
        impl BitPattern<$storage> for $value {
            #[inline]
            fn into_bits(self) -> $storage {
                self as $storage
            }

            #[inline]
            fn from_bits(bits: $storage) -> Self {
                bits as $value
            }
        }
    )*};
}

int_bit_pattern!(u8 => u8, u16, u32, u64, u128, usize);
int_bit_pattern!(u16 => u8, u16, u32, u64, u128, usize);
int_bit_pattern!(u32 => u8, u16, u32, u64, u128, usize);
int_bit_pattern!(u64 => u8, u16, u32, u64, u128, usize);
int_bit_pattern!(u128 => u8, u16, u32, u64, u128, usize);
int_bit_pattern!(usize => u8, u16, u32, u64, u128, usize);

impl<T: UIntLike> BitPattern<T> for bool {
    #[inline]
    fn into_bits(self) -> T {
        if self {
            T::one()
        } else {
            T::zero()
        }
    }

    #[inline]
    fn from_bits(bits: T) -> Self {
        bits != T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_round_trip() {
        assert_eq!(<u8 as BitPattern<u32>>::into_bits(0xAB), 0xAB_u32);
        assert_eq!(<u8 as BitPattern<u32>>::from_bits(0xAB), 0xAB_u8);
        assert_eq!(<u64 as BitPattern<u8>>::into_bits(0x1F), 0x1F_u8);
        assert_eq!(<u16 as BitPattern<u128>>::from_bits(0xBEEF), 0xBEEF_u16);
    }

    #[test]
    fn bool_pattern() {
        // `bool` implements `BitPattern` for every storage type, so the
        // storage must be named explicitly.
        assert_eq!(<bool as BitPattern<u8>>::into_bits(true), 1_u8);
        assert_eq!(<bool as BitPattern<u32>>::into_bits(false), 0_u32);
        assert!(<bool as BitPattern<u16>>::from_bits(1));
        assert!(!<bool as BitPattern<u16>>::from_bits(0));
    }
}
