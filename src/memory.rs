// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::{BitPattern, BitSpan, Bus, UIntLike};
use core::marker::PhantomData;

/// A typed view of the bit span `[LSB, MSB]` within a live hardware register
/// reached through the bus `B`.
///
/// Unlike [`Field`](crate::Field), a `MemoryField` owns its path to storage:
/// `get` performs one ordered read of the full register word, and `set`
/// performs a read-modify-write (or, for a field covering the entire word, a
/// single write). The constructor is unsafe because it asserts that the bus
/// really does address a register; the accessors themselves are safe.
#[derive(Clone, Copy)]
pub struct MemoryField<T: UIntLike, B: Bus<T>, const LSB: u32, const MSB: u32> {
    bus: B,
    _storage: PhantomData<T>,
}

impl<T: UIntLike, B: Bus<T>, const LSB: u32, const MSB: u32> MemoryField<T, B, LSB, MSB> {
    /// Constructs a field over the register word addressed by `bus`.
    ///
    /// # Safety
    /// `bus` must address a live register of type `T` for as long as this
    /// field is accessed, per the safety requirements of [`Bus`].
    pub const unsafe fn new(bus: B) -> MemoryField<T, B, LSB, MSB> {
        MemoryField { bus, _storage: PhantomData }
    }

    /// The bit pattern with ones exactly at this field's positions.
    #[inline]
    pub fn mask(self) -> T {
        BitSpan::<LSB, MSB>::mask::<T>()
    }

    /// Reads the register word once and extracts this field's bits.
    #[inline]
    pub fn get<V: BitPattern<T>>(self) -> V {
        // Safety: upheld by the caller of `new`.
        let word = unsafe { self.bus.read() };
        V::from_bits((word & self.mask()) >> LSB)
    }

    /// Replaces this field's bits within the register.
    ///
    /// By default this is one ordered read followed by one ordered write.
    /// When the span covers the entire register width the write determines
    /// every bit, so the read is skipped and a single write is issued. The
    /// choice is a constant of the field's type, decided at compile time from
    /// its bit span.
    #[inline]
    pub fn set<V: BitPattern<T>>(self, value: V) {
        let bits = (value.into_bits() << LSB) & self.mask();
        if BitSpan::<LSB, MSB>::covers::<T>() {
            // Safety: upheld by the caller of `new`.
            unsafe { self.bus.write(bits) };
        } else {
            // Safety: as above, for both the read and the write.
            let word = unsafe { self.bus.read() };
            unsafe { self.bus.write((word & !self.mask()) | bits) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// A fake bus over a caller-owned cell that counts accesses.
    #[derive(Clone, Copy)]
    struct Counting<'c, T: UIntLike> {
        word: &'c Cell<T>,
        reads: &'c Cell<usize>,
        writes: &'c Cell<usize>,
    }

    impl<'c, T: UIntLike> Counting<'c, T> {
        fn new(word: &'c Cell<T>, reads: &'c Cell<usize>, writes: &'c Cell<usize>) -> Self {
            Counting { word, reads, writes }
        }
    }

    impl<T: UIntLike> Bus<T> for Counting<'_, T> {
        unsafe fn read(self) -> T {
            self.reads.set(self.reads.get() + 1);
            self.word.get()
        }

        unsafe fn write(self, value: T) {
            self.writes.set(self.writes.get() + 1);
            self.word.set(value);
        }
    }

    #[test]
    fn set_is_one_read_one_write() {
        let word = Cell::new(0xFF_u8);
        let (reads, writes) = (Cell::new(0), Cell::new(0));
        let field = unsafe {
            MemoryField::<u8, _, 2, 4>::new(Counting::new(&word, &reads, &writes))
        };
        field.set(0b101_u8);
        assert_eq!(word.get(), 0xF7);
        assert_eq!(reads.get(), 1);
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn get_is_one_read() {
        let word = Cell::new(0xF7_u8);
        let (reads, writes) = (Cell::new(0), Cell::new(0));
        let field = unsafe {
            MemoryField::<u8, _, 2, 4>::new(Counting::new(&word, &reads, &writes))
        };
        assert_eq!(field.get::<u8>(), 0b101);
        assert_eq!(reads.get(), 1);
        assert_eq!(writes.get(), 0);
    }

    #[test]
    fn full_width_set_skips_the_read() {
        let word = Cell::new(0xFF_u8);
        let (reads, writes) = (Cell::new(0), Cell::new(0));
        let field = unsafe {
            MemoryField::<u8, _, 0, 7>::new(Counting::new(&word, &reads, &writes))
        };
        field.set(0x3C_u8);
        assert_eq!(word.get(), 0x3C);
        assert_eq!(reads.get(), 0);
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn optimized_and_unoptimized_paths_agree() {
        // A full-width write and the equivalent read-modify-write must land
        // on the same final register contents for every input.
        for initial in [0x00_u8, 0x5A, 0xFF] {
            for value in 0..=u8::MAX {
                let word = Cell::new(initial);
                let (reads, writes) = (Cell::new(0), Cell::new(0));
                let field = unsafe {
                    MemoryField::<u8, _, 0, 7>::new(Counting::new(&word, &reads, &writes))
                };
                field.set(value);
                let mask = field.mask();
                assert_eq!(word.get(), (initial & !mask) | (value & mask));
            }
        }
    }

    #[test]
    fn round_trip_against_simulated_cell() {
        let word = Cell::new(0xDEAD_BEEF_u32);
        let (reads, writes) = (Cell::new(0), Cell::new(0));
        let field = unsafe {
            MemoryField::<u32, _, 9, 14>::new(Counting::new(&word, &reads, &writes))
        };
        for value in 0..64_u32 {
            field.set(value);
            assert_eq!(field.get::<u32>(), value);
            assert_eq!(word.get() & !field.mask(), 0xDEAD_BEEF & !field.mask());
        }
    }
}
