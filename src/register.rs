// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::{BitPattern, Bus, MemoryField, UIntLike};

/// Trait implemented by all address-based register types, usually through the
/// [`registers!`](crate::registers) macro.
///
/// A register is an ordered, fixed-size collection of memory fields sharing
/// one storage word reached through one bus. Fields are looked up by their
/// declaration position via [`FieldAt`]; an out-of-range index is a missing
/// trait implementation and therefore a compile error. Each accessor is
/// stateless and independent: nothing is cached or batched, and every call is
/// at most one ordered read plus one ordered write.
pub trait Register: Copy {
    /// The register's underlying storage type, which fixes its total width.
    type Value: UIntLike;

    /// The bus through which the storage word is reached.
    type Bus: Bus<Self::Value>;

    /// The number of declared fields. Fixed at definition time.
    const FIELD_COUNT: usize;

    /// The bus addressing this register's storage word.
    fn bus(self) -> Self::Bus;

    /// Reads the field at declared position `INDEX` as a `V`.
    #[inline]
    fn get<const INDEX: usize, V>(self) -> V
    where
        Self: FieldAt<INDEX>,
        V: BitPattern<Self::Value>,
    {
        self.field_at().get()
    }

    /// Writes the field at declared position `INDEX`.
    #[inline]
    fn set<const INDEX: usize, V>(self, value: V)
    where
        Self: FieldAt<INDEX>,
        V: BitPattern<Self::Value>,
    {
        self.field_at().set(value);
    }

    /// Reads the full register word in one ordered access, bypassing field
    /// decomposition.
    #[inline]
    fn read(self) -> Self::Value {
        // Safety: upheld by the caller of the register's unsafe constructor.
        unsafe { self.bus().read() }
    }

    /// Writes the full register word in one ordered access, bypassing field
    /// decomposition.
    #[inline]
    fn write(self, value: Self::Value) {
        // Safety: as in `read`.
        unsafe { self.bus().write(value) }
    }
}

/// Positional field lookup for a [`Register`]. Implemented by generated code
/// for each declared field position, in declaration order starting at 0.
pub trait FieldAt<const INDEX: usize>: Register {
    /// The [`MemoryField`](crate::MemoryField) type at this position.
    type Field: MemoryAccess<Self::Value>;

    /// The field at this position, over this register's bus.
    fn field_at(self) -> Self::Field;
}

/// Address-based field access with the bit span erased behind a trait, so
/// [`Register`]'s provided methods can dispatch on [`FieldAt::Field`].
pub trait MemoryAccess<T: UIntLike>: Copy {
    /// Reads the register word once and extracts this field's bits.
    fn get<V: BitPattern<T>>(self) -> V;

    /// Replaces this field's bits within the register.
    fn set<V: BitPattern<T>>(self, value: V);
}

impl<T, B, const LSB: u32, const MSB: u32> MemoryAccess<T> for MemoryField<T, B, LSB, MSB>
where
    T: UIntLike,
    B: Bus<T>,
{
    #[inline]
    fn get<V: BitPattern<T>>(self) -> V {
        MemoryField::get(self)
    }

    #[inline]
    fn set<V: BitPattern<T>>(self, value: V) {
        MemoryField::set(self, value);
    }
}
