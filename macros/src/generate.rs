// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

//! Code generation for register definitions and the `BitPattern` derive.

use crate::Definition;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, LitInt, Path, Result};

pub fn generate(regspan: &Path, definition: &Definition) -> TokenStream {
    match &definition.base {
        Some(base) => mmio_register(regspan, definition, base),
        None => value_register(regspan, definition),
    }
}

fn mmio_register(regspan: &Path, definition: &Definition, base: &LitInt) -> TokenStream {
    let attributes = &definition.attributes;
    let visibility = &definition.visibility;
    let name = &definition.name;
    let storage = &definition.storage;
    let field_count = definition.fields.len();
    let bus_bound = quote![#regspan::Bus<#storage>];

    let field_at_impls = definition.fields.iter().enumerate().map(|(index, field)| {
        let lsb = &field.lsb;
        let msb = &field.msb;
        quote! {
            impl<B: #bus_bound> #regspan::FieldAt<#index> for #name<B> {
                type Field = #regspan::MemoryField<#storage, B, #lsb, #msb>;
                fn field_at(self) -> Self::Field {
                    // Safety: the register's constructor asserted that the bus
                    // addresses a live register word.
                    unsafe { #regspan::MemoryField::new(self.bus) }
                }
            }
        }
    });

    let accessors = definition.fields.iter().map(|field| {
        let field_attributes = &field.attributes;
        let field_name = &field.name;
        let lsb = &field.lsb;
        let msb = &field.msb;
        quote! {
            #(#field_attributes)*
            pub fn #field_name(self) -> #regspan::MemoryField<#storage, B, #lsb, #msb> {
                // Safety: as in `field_at`.
                unsafe { #regspan::MemoryField::new(self.bus) }
            }
        }
    });

    quote! {
        #(#attributes)*
        #visibility struct #name<B: #bus_bound = #regspan::Mmio<#storage>> {
            bus: B,
        }

        impl #name<#regspan::Mmio<#storage>> {
            /// The declared base address of this register.
            pub const BASE: usize = #base;

            /// Constructs the register over its declared base address.
            ///
            /// # Safety
            /// `BASE` must address a live, word-aligned register of the
            /// declared storage type for as long as the register is accessed.
            pub const unsafe fn new() -> Self {
                Self { bus: #regspan::Mmio::at(Self::BASE) }
            }
        }

        impl<B: #bus_bound> #name<B> {
            /// Constructs the register over an arbitrary bus, e.g. a fake bus
            /// in tests or a remapped peripheral.
            ///
            /// # Safety
            /// `bus` must address a live register of the declared storage
            /// type for as long as the register is accessed.
            pub const unsafe fn with_bus(bus: B) -> Self {
                Self { bus }
            }

            #(#accessors)*
        }

        impl<B: #bus_bound> #regspan::reexport::core::clone::Clone for #name<B> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<B: #bus_bound> #regspan::reexport::core::marker::Copy for #name<B> {}

        impl<B: #bus_bound> #regspan::Register for #name<B> {
            type Value = #storage;
            type Bus = B;
            const FIELD_COUNT: usize = #field_count;
            fn bus(self) -> B {
                self.bus
            }
        }

        #(#field_at_impls)*
    }
}

fn value_register(regspan: &Path, definition: &Definition) -> TokenStream {
    let attributes = &definition.attributes;
    let visibility = &definition.visibility;
    let name = &definition.name;
    let storage = &definition.storage;
    let field_count = definition.fields.len();

    let field_at_impls = definition.fields.iter().enumerate().map(|(index, field)| {
        let lsb = &field.lsb;
        let msb = &field.msb;
        quote! {
            impl #regspan::ValueFieldAt<#index> for #name {
                type Field = #regspan::Field<#storage, #lsb, #msb>;
                const FIELD: Self::Field = #regspan::Field::new();
            }
        }
    });

    let accessors = definition.fields.iter().map(|field| {
        let field_attributes = &field.attributes;
        let field_name = &field.name;
        let lsb = &field.lsb;
        let msb = &field.msb;
        quote! {
            #(#field_attributes)*
            pub const fn #field_name() -> #regspan::Field<#storage, #lsb, #msb> {
                #regspan::Field::new()
            }
        }
    });

    quote! {
        #(#attributes)*
        #visibility struct #name;

        impl #name {
            #(#accessors)*
        }

        impl #regspan::reexport::core::clone::Clone for #name {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl #regspan::reexport::core::marker::Copy for #name {}

        impl #regspan::ValueRegister for #name {
            type Value = #storage;
            const FIELD_COUNT: usize = #field_count;
        }

        #(#field_at_impls)*
    }
}

/// Implements `BitPattern<T>` for a fieldless enum, for every unsigned
/// storage type. `from_bits` matches the declared variants and treats any
/// other bit pattern as a contract violation.
///
/// Derive macros receive no `$crate` token, so unlike `registers!` the
/// emitted impls must hard-code `::regspan::BitPattern`; the caller cannot
/// rename the regspan dependency.
pub fn bit_pattern(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(Error::new_spanned(
            input,
            "BitPattern can only be derived for enums",
        ));
    };
    let name = &input.ident;
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                "BitPattern variants must not carry fields",
            ));
        }
        if variant.discriminant.is_none() {
            return Err(Error::new_spanned(
                variant,
                "BitPattern variants must carry an explicit discriminant",
            ));
        }
    }
    let panic_message = format!("bit pattern does not match any variant of `{name}`");
    let storage_types = ["u8", "u16", "u32", "u64", "u128", "usize"]
        .map(|type_name| format_ident!("{type_name}"));
    let impls = storage_types.iter().map(|storage| {
        let arms = data.variants.iter().map(|variant| {
            let variant = &variant.ident;
            quote![bits if bits == #name::#variant as #storage => #name::#variant,]
        });
        quote! {
            impl ::regspan::BitPattern<#storage> for #name {
                #[inline]
                fn into_bits(self) -> #storage {
                    self as #storage
                }

                #[inline]
                fn from_bits(bits: #storage) -> Self {
                    match bits {
                        #(#arms)*
                        _ => ::core::panic!(#panic_message),
                    }
                }
            }
        }
    });
    Ok(TokenStream::from_iter(impls))
}
