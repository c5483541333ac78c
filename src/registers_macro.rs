// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

/// Declares register types from an ordered list of field bit spans.
///
/// Each definition names a register, its storage type (an unsigned integer,
/// which fixes the register's width), optionally a base address, and its
/// fields as inclusive `[lsb, msb]` spans. Declaration order fixes each
/// field's positional index.
///
/// ```
/// use regspan::registers;
///
/// registers! {
///     /// Control register, backed by a live memory-mapped location.
///     pub Control: u8 @ 0x4000_0000 {
///         enable: [0, 0],
///         mode: [2, 4],
///     },
///
///     /// A packed value with no address; storage is supplied per call.
///     pub Frame: u32 {
///         kind: [0, 7],
///         len: [8, 15],
///     },
/// }
/// ```
///
/// A definition with `@ address` produces an address-based register
/// implementing [`Register`](crate::Register), generic over its
/// [`Bus`](crate::Bus) (defaulting to [`Mmio`](crate::Mmio) at the declared
/// address) with an unsafe constructor. A definition without an address
/// produces a unit type implementing [`ValueRegister`](crate::ValueRegister).
/// Both also get one named accessor per field returning the field itself.
///
/// The macro does not verify that declared spans are disjoint or that the
/// address is valid; both are the caller's responsibility.
#[macro_export]
macro_rules! registers {
    {$($arguments:tt)*} => {
        $crate::reexport::registers!($crate $($arguments)*);
    }
}
