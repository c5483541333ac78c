// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

mod generate;
mod parse;

use generate::generate;
use proc_macro2::TokenStream;
use syn::{parse_macro_input, Attribute, Ident, LitInt, Path, TypePath, Visibility};

#[proc_macro]
pub fn registers(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as Input);
    TokenStream::from_iter(input.definitions.iter().map(|d| generate(&input.regspan, d))).into()
}

#[proc_macro_derive(BitPattern)]
pub fn bit_pattern(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    generate::bit_pattern(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Represents the full input to the registers! procedural macro. Note that
/// `regspan::registers!` prepends `$crate` to the input provided by the user, so that the
/// generated code can refer to regspan even if the user has renamed the crate. Therefore, after
/// `regspan::registers!` is expanded, the full input looks like:
///
/// ```text
/// regspan_macros::registers! {
///     ::regspan                        // The prepended $crate
///     /// Doc comment                  // Doc comment that should attach to `control`
///     pub Control: u8 @ 0x4000_0000 {  // An address-based register definition
///         enable: [0, 0],
///         mode: [2, 4],
///     },
///     pub Frame: u32 {                 // A value-based register definition (no address)
///         kind: [0, 7],
///         len: [8, 15],
///     },
/// }
/// ```
struct Input {
    /// The $crate passed in by the registers! macro_rules macro (used to refer to the regspan
    /// crate).
    regspan: Path,
    definitions: Vec<Definition>,
}

/// An individual register definition.
///
/// ```text
/// regspan::registers! {
///     // `Control` is a Definition; the `@ address` makes it address-based,
///     // and the doc comment before it is part of the definition.
///     /// Doc comment
///     pub Control: u8 @ 0x4000_0000 {
///         enable: [0, 0],  // Individual fields are `FieldDef`s, not Definitions
///         mode: [2, 4],
///     },
///
///     // `Frame` is a Definition with no address, so it is value-based.
///     pub Frame: u32 {
///         kind: [0, 7],
///         len: [8, 15],
///     },
/// }
/// ```
struct Definition {
    /// Attributes that apply to this definition that are just copied from the input (doc comments
    /// and cfg attributes).
    attributes: Vec<Attribute>,
    visibility: Visibility,
    name: Ident,

    /// The register's storage type, an unsigned integer type that fixes the register's total
    /// width.
    storage: TypePath,

    /// The base address for address-based registers. `None` makes this a value-based register
    /// whose storage word is supplied by the caller at each access.
    base: Option<LitInt>,

    /// The declared fields. Declaration order fixes each field's positional index.
    fields: Vec<FieldDef>,
}

/// An individual field definition within a register.
///
/// ```text
/// regspan::registers! {
///     pub Control: u8 @ 0x4000_0000 {
///         enable: [0, 0],
///       //^^^^^^^^^^^^^^ FieldDef
///
///         // The doc comment is part of the field and attaches to its named accessor.
///         /// Doc comment
///         mode: [2, 4],
///     },
/// }
/// ```
#[cfg_attr(test, derive(Debug, PartialEq))]
struct FieldDef {
    /// Attributes that apply to this field that are just copied from the input (doc comments and
    /// cfg attributes).
    attributes: Vec<Attribute>,
    name: Ident,

    /// The inclusive bit-position bounds of the field's span. The library's const-evaluated
    /// layout checks reject `lsb > msb` and spans exceeding the storage width; the macro passes
    /// the literals through untouched.
    lsb: LitInt,
    msb: LitInt,
}
