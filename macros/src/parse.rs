// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Regspan Contributors 2026.

//! Input parser.

use crate::{Definition, FieldDef, Input};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, bracketed, Attribute, Result, Token};

impl Parse for Input {
    fn parse(input: ParseStream) -> Result<Input> {
        let regspan = input.parse()?;
        let definitions = Punctuated::<Definition, Token![,]>::parse_terminated(input)?
            .into_iter()
            .collect();
        Ok(Input {
            regspan,
            definitions,
        })
    }
}

impl Parse for Definition {
    fn parse(input: ParseStream) -> Result<Definition> {
        let attributes = Attribute::parse_outer(input)?;
        let visibility = input.parse()?;
        let name = input.parse()?;
        input.parse::<Token![:]>()?;
        let storage = input.parse()?;
        let base = if input.peek(Token![@]) {
            input.parse::<Token![@]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        let fields;
        braced!(fields in input);
        let fields = Punctuated::<FieldDef, Token![,]>::parse_terminated(&fields)?
            .into_iter()
            .collect();
        Ok(Definition {
            attributes,
            visibility,
            name,
            storage,
            base,
            fields,
        })
    }
}

impl Parse for FieldDef {
    fn parse(input: ParseStream) -> Result<FieldDef> {
        let attributes = Attribute::parse_outer(input)?;
        let name = input.parse()?;
        input.parse::<Token![:]>()?;
        let span;
        bracketed!(span in input);
        let lsb = span.parse()?;
        span.parse::<Token![,]>()?;
        let msb = span.parse()?;
        if !span.is_empty() {
            return Err(span.error("expected `[lsb, msb]`"));
        }
        Ok(FieldDef {
            attributes,
            name,
            lsb,
            msb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::{parse2, parse_quote, Ident, LitInt, TypePath};

    #[test]
    fn field_def() {
        let field: FieldDef = parse_quote![mode: [2, 4]];
        assert_eq!(
            field,
            FieldDef {
                attributes: vec![],
                name: parse_quote![mode],
                lsb: parse_quote![2],
                msb: parse_quote![4],
            }
        );

        let field: FieldDef = parse_quote! {
            /// Single-bit enable.
            enable: [0, 0]
        };
        let expected_name: Ident = parse_quote![enable];
        assert_eq!(field.name, expected_name);
        assert_eq!(field.attributes.len(), 1);

        let error = parse2::<FieldDef>(quote![mode: [2, 4, 6]]).unwrap_err();
        assert!(error.to_string().contains("expected `[lsb, msb]`"));
    }

    #[test]
    fn mmio_definition() {
        let definition: Definition = parse_quote! {
            /// Control register.
            pub Control: u8 @ 0x4000_0000 {
                enable: [0, 0],
                mode: [2, 4],
            }
        };
        let expected_name: Ident = parse_quote![Control];
        assert_eq!(definition.name, expected_name);
        let expected_storage: TypePath = parse_quote![u8];
        assert_eq!(definition.storage, expected_storage);
        let expected_base: Option<LitInt> = Some(parse_quote![0x4000_0000]);
        assert_eq!(definition.base, expected_base);
        assert_eq!(definition.attributes.len(), 1);
        assert_eq!(definition.fields.len(), 2);
        let expected_field_name: Ident = parse_quote![mode];
        assert_eq!(definition.fields[1].name, expected_field_name);
    }

    #[test]
    fn value_definition() {
        let definition: Definition = parse_quote! {
            pub Frame: u32 {
                kind: [0, 7],
                len: [8, 15],
            }
        };
        assert_eq!(definition.base, None);
        assert_eq!(definition.fields.len(), 2);
        let expected_lsb: LitInt = parse_quote![8];
        assert_eq!(definition.fields[1].lsb, expected_lsb);
    }

    #[test]
    fn input() {
        let input: Input = parse_quote! {
            ::regspan
            pub Control: u8 @ 0x4000_0000 {
                enable: [0, 0],
            },
            Frame: u32 {
                kind: [0, 7],
            },
        };
        assert_eq!(input.definitions.len(), 2);
        assert!(input.definitions[0].base.is_some());
        assert!(input.definitions[1].base.is_none());
    }
}
