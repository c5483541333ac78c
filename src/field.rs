// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::{BitPattern, BitSpan, UIntLike};
use core::marker::PhantomData;

/// A typed view of the bit span `[LSB, MSB]` within a caller-supplied value
/// of type `T`.
///
/// A `Field` has no address: `get` extracts the field's bits from a value
/// passed by the caller, and `set` injects them into caller-owned storage
/// passed by mutable reference. For fields backed by a live hardware
/// location, see [`MemoryField`](crate::MemoryField).
#[derive(Clone, Copy)]
pub struct Field<T: UIntLike, const LSB: u32, const MSB: u32> {
    _storage: PhantomData<T>,
}

impl<T: UIntLike, const LSB: u32, const MSB: u32> Field<T, LSB, MSB> {
    pub const fn new() -> Field<T, LSB, MSB> {
        Field { _storage: PhantomData }
    }

    /// The bit pattern with ones exactly at this field's positions.
    #[inline]
    pub fn mask(self) -> T {
        BitSpan::<LSB, MSB>::mask::<T>()
    }

    /// Extracts this field's bits from `value`.
    #[inline]
    pub fn get<V: BitPattern<T>>(self, value: T) -> V {
        V::from_bits((value & self.mask()) >> LSB)
    }

    /// Replaces this field's bits within `storage`, leaving all bits outside
    /// the mask unchanged.
    #[inline]
    pub fn set<V: BitPattern<T>>(self, storage: &mut T, value: V) {
        *storage = (*storage & !self.mask()) | ((value.into_bits() << LSB) & self.mask());
    }
}

impl<T: UIntLike, const LSB: u32, const MSB: u32> Default for Field<T, LSB, MSB> {
    fn default() -> Field<T, LSB, MSB> {
        Field::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_masks_and_shifts() {
        let field = Field::<u8, 2, 4>::new();
        assert_eq!(field.get::<u8>(0b1110_1000), 0b010);
        assert_eq!(field.get::<u8>(0xFF), 0b111);
    }

    #[test]
    fn set_preserves_outside_bits() {
        // 8-bit register, field [2, 4], mask 0x1C. Starting from 0xFF:
        // 0xFF & !0x1C = 0xE3; (0b101 << 2) & 0x1C = 0x14; 0xE3 | 0x14 = 0xF7.
        let field = Field::<u8, 2, 4>::new();
        let mut storage = 0xFF_u8;
        field.set(&mut storage, 0b101_u8);
        assert_eq!(storage, 0xF7);
    }

    #[test]
    fn round_trip() {
        let field = Field::<u32, 9, 14>::new();
        for value in 0..64_u32 {
            let mut storage = 0xDEAD_BEEF_u32;
            field.set(&mut storage, value);
            assert_eq!(field.get::<u32>(storage), value);
            assert_eq!(storage & !field.mask(), 0xDEAD_BEEF & !field.mask());
        }
    }

    #[test]
    fn oversized_value_is_truncated_to_the_field() {
        let field = Field::<u8, 2, 4>::new();
        let mut storage = 0_u8;
        field.set(&mut storage, 0xFF_u8);
        assert_eq!(storage, 0x1C);
    }

    #[test]
    fn bool_single_bit() {
        let field = Field::<u16, 3, 3>::new();
        let mut storage = 0_u16;
        field.set(&mut storage, true);
        assert_eq!(storage, 0b1000);
        assert!(field.get::<bool>(storage));
        field.set(&mut storage, false);
        assert_eq!(storage, 0);
    }
}
