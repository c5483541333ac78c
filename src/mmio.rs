// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::{Bus, UIntLike};

/// Memory-mapped register bus: one `T`-sized word at a fixed location.
///
/// Accesses go through [`read_volatile`](core::ptr::read_volatile) and
/// [`write_volatile`](core::ptr::write_volatile), so they are never cached,
/// elided, or reordered relative to other volatile accesses — the location is
/// treated as externally observable hardware state.
pub struct Mmio<T>(pub *mut T);

impl<T> Clone for Mmio<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Mmio<T> {}

impl<T: UIntLike> Mmio<T> {
    /// Constructs a bus addressing the register word at `address`.
    ///
    /// Constructing the bus is safe; it is the accesses performed through it
    /// (via the unsafe constructors of [`MemoryField`](crate::MemoryField)
    /// and generated register types) that require `address` to point at a
    /// live, word-aligned `T`-sized register.
    pub const fn at(address: usize) -> Mmio<T> {
        Mmio(address as *mut T)
    }
}

impl<T: UIntLike> Bus<T> for Mmio<T> {
    unsafe fn read(self) -> T {
        // Safety: the caller of the enclosing unsafe constructor guaranteed
        // this pointer addresses a live register word.
        unsafe { self.0.read_volatile() }
    }

    unsafe fn write(self, value: T) {
        // Safety: as in `read`.
        unsafe { self.0.write_volatile(value) }
    }
}
