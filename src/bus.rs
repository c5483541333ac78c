// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

//! # Buses
//!
//! A bus is the mechanism through which an address-based field or register
//! reaches its backing word of storage. The real bus is [`Mmio`], which
//! performs ordered, volatile accesses against a memory-mapped location.
//! Other backends (e.g. the counting buses used by this crate's own tests)
//! can implement [`Bus`] to stand in for hardware, so code written against
//! [`MemoryField`] and [`Register`] never needs to know which backend it is
//! talking to.
//!
//! A bus value addresses exactly one `T`-sized register word. Accesses are
//! single word-sized loads and stores; no partial-word or multi-word
//! atomicity is provided or assumed.
//!
//! [`Mmio`]: crate::Mmio
//! [`MemoryField`]: crate::MemoryField
//! [`Register`]: crate::Register

use crate::UIntLike;

/// Raw ordered access to a single register word of type `T`.
pub trait Bus<T: UIntLike>: Copy {
    /// Performs one ordered read of the register word.
    ///
    /// # Safety
    /// There must be a live register of type `T` behind this bus, and reading
    /// it must have no safety-relevant side effects the caller has not
    /// accounted for.
    unsafe fn read(self) -> T;

    /// Performs one ordered write of the register word.
    ///
    /// # Safety
    /// There must be a live register of type `T` behind this bus, and writing
    /// `value` to it must have no safety-relevant side effects the caller has
    /// not accounted for.
    unsafe fn write(self, value: T);
}
