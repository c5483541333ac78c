// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

use crate::{BitPattern, Field, UIntLike};

/// Trait implemented by all value-based register types, usually through the
/// [`registers!`](crate::registers) macro.
///
/// The address-free counterpart of [`Register`](crate::Register): the same
/// ordered collection of fields indexed by declaration position, but the
/// storage word is supplied by the caller at each access instead of being
/// owned by the type. Used to pack fields into or extract them from transient
/// data, e.g. a protocol word being assembled before transmission or decoded
/// after receipt.
pub trait ValueRegister {
    /// The register's underlying storage type, which fixes its total width.
    type Value: UIntLike;

    /// The number of declared fields. Fixed at definition time.
    const FIELD_COUNT: usize;

    /// Extracts the field at declared position `INDEX` from `value`.
    #[inline]
    fn get<const INDEX: usize, V>(value: Self::Value) -> V
    where
        Self: ValueFieldAt<INDEX>,
        V: BitPattern<Self::Value>,
    {
        Self::FIELD.get(value)
    }

    /// Replaces the field at declared position `INDEX` within `storage`,
    /// leaving all bits outside its mask unchanged.
    #[inline]
    fn set<const INDEX: usize, V>(storage: &mut Self::Value, value: V)
    where
        Self: ValueFieldAt<INDEX>,
        V: BitPattern<Self::Value>,
    {
        Self::FIELD.set(storage, value);
    }
}

/// Positional field lookup for a [`ValueRegister`]. Implemented by generated
/// code for each declared field position, in declaration order starting at 0.
pub trait ValueFieldAt<const INDEX: usize>: ValueRegister {
    /// The [`Field`] type at this position.
    type Field: ValueAccess<Self::Value>;

    /// The field at this position.
    const FIELD: Self::Field;
}

/// Value-based field access with the bit span erased behind a trait, so
/// [`ValueRegister`]'s provided methods can dispatch on
/// [`ValueFieldAt::Field`].
pub trait ValueAccess<T: UIntLike>: Copy {
    /// Extracts this field's bits from `value`.
    fn get<V: BitPattern<T>>(self, value: T) -> V;

    /// Replaces this field's bits within `storage`.
    fn set<V: BitPattern<T>>(self, storage: &mut T, value: V);
}

impl<T: UIntLike, const LSB: u32, const MSB: u32> ValueAccess<T> for Field<T, LSB, MSB> {
    #[inline]
    fn get<V: BitPattern<T>>(self, value: T) -> V {
        Field::get(self, value)
    }

    #[inline]
    fn set<V: BitPattern<T>>(self, storage: &mut T, value: V) {
        Field::set(self, storage, value);
    }
}
