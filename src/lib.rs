// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

//! Compile-time bit-field views over fixed-width registers.
//!
//! `regspan` lets driver and protocol code declare the bit layout of a
//! register once and then read or write individual fields with correct
//! masking, instead of scattering shift/mask arithmetic through call sites.
//! Layouts are plain types: an invalid declaration (inverted span, span wider
//! than the storage, out-of-range field index) is a compile error, never a
//! runtime one.
//!
//! Registers come in two flavors. A register declared with a base address is
//! backed by a live memory-mapped location and accessed through ordered,
//! volatile loads and stores. A register declared without an address packs and
//! unpacks fields of a caller-supplied value, e.g. a protocol word:
//!
//! ```
//! use regspan::{registers, ValueRegister};
//!
//! registers! {
//!     /// Frame header word.
//!     pub Frame: u32 {
//!         kind: [0, 7],
//!         len: [8, 15],
//!     }
//! }
//!
//! let mut word = 0u32;
//! Frame::set::<0, u8>(&mut word, 0xAB);
//! Frame::set::<1, u8>(&mut word, 0xCD);
//! assert_eq!(Frame::get::<0, u8>(word), 0xAB);
//! assert_eq!(Frame::get::<1, u8>(word), 0xCD);
//! ```
//!
//! The library never checks that declared fields are disjoint or that a
//! declared address is valid; both are the caller's responsibility.

#![no_std]

mod bus;
mod field;
mod memory;
mod mmio;
mod pattern;
pub mod reexport;
mod register;
mod registers_macro;
mod span;
mod value_register;

pub use bus::Bus;
pub use field::Field;
pub use memory::MemoryField;
pub use mmio::Mmio;
pub use pattern::BitPattern;
pub use register::{FieldAt, MemoryAccess, Register};
pub use span::{Bit, BitSpan};
pub use value_register::{ValueAccess, ValueFieldAt, ValueRegister};

/// Derives [`BitPattern`] for a fieldless enum, allowing it to be used as a
/// field value type. Every variant must carry an explicit discriminant.
///
/// Unlike [`registers!`](crate::registers), which routes every path through
/// `$crate`, a derive macro cannot see how the calling crate refers to
/// regspan. The generated impls name the trait as `::regspan::BitPattern`,
/// so this crate must be reachable under the name `regspan` (i.e. not
/// renamed in the caller's `Cargo.toml`) for the derive to expand.
pub use regspan_macros::BitPattern;

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

/// Trait representing the base type of registers.
///
/// `UIntLike` defines the properties required to read, write, and mask a
/// register word through its supertrait requirements. It is implemented for
/// the common unsigned integer types: [`u8`], [`u16`], [`u32`], [`u64`],
/// [`u128`], and [`usize`].
pub trait UIntLike:
    BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Sub<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Eq
    + Copy
    + Clone
    + Debug
    + 'static
{
    /// The width of this type in bits.
    const BITS: u32;

    /// The representation of the value `0` in the implementing type.
    fn zero() -> Self;

    /// The representation of the value `1` in the implementing type.
    fn one() -> Self;
}

macro_rules! uintlike_impl_for {
    ($($type:ty),*) => {$(
        impl UIntLike for $type {
            const BITS: u32 = <$type>::BITS;

            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }
        }
    )*};
}

uintlike_impl_for!(u8, u16, u32, u64, u128, usize);
