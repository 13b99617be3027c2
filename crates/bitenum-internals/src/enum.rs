// SPDX-License-Identifier: MPL-2.0

//! The `bitwise` macro for enums.

use super::*;
use crate::repr::{Discrim, DiscrimRange};

pub(crate) struct Enum;

impl Form for Enum {
    type Item = syn::ItemEnum;

    fn bitwise(mut item: Self::Item) -> Result<Output<Self::Item>> {
        check_generics(&item.generics)?;

        if item.variants.is_empty() {
            return Err(err!(item.brace_token.span.join(); "enum cannot have zero variants"));
        }

        // If the user names an integer primitive in a `#[repr]` attribute, discriminants are free
        // to be any constant expression; the compiler checks them against the representation.
        // Otherwise, we evaluate every discriminant ourselves to pick a representation.
        let explicit_repr = IntType::from_repr_attrs(&item.attrs)?;

        let mut variants = Vec::with_capacity(item.variants.len());
        let mut range = DiscrimRange::default();
        // This is the discriminant that the next variant takes if it does not specify one.
        //
        // This is `None` after the discriminant overflows 128 bits.
        let mut next_discrim = Some(Discrim::ZERO);

        for variant in item.variants.iter() {
            if !variant.fields.is_empty() {
                return Err(err!(variant.fields.span(); "variant fields are not supported"));
            }

            if explicit_repr.is_none() {
                let discrim = match &variant.discriminant {
                    Some((_, expr)) => Discrim::eval(expr)?,
                    None => next_discrim.ok_or_else(|| {
                        err!(variant.ident.span(); "discriminant does not fit in 128 bits")
                    })?,
                };
                range.include(discrim);
                next_discrim = discrim.next();
            }

            variants.push(Variant {
                cfg_attrs: variant
                    .attrs
                    .iter()
                    .filter(|attr| attr.path().is_ident("cfg"))
                    .cloned()
                    .collect(),
                ident: variant.ident.clone(),
            });
        }

        let item_span = item.span();
        let repr = match explicit_repr {
            Some(repr) => repr,
            None => {
                let repr = IntType::narrowest_for(&range).ok_or_else(|| {
                    err!(item_span; "discriminants cannot be represented by any integer primitive")
                })?;
                // Rendered:
                //   #[repr(/* repr */)]
                item.attrs.push(syn::Attribute {
                    pound_token: syn::Token![#](item_span),
                    style: syn::AttrStyle::Outer,
                    bracket_token: syn::token::Bracket(item_span),
                    meta: syn::MetaList {
                        path: path!(item_span; repr),
                        delimiter: syn::MacroDelimiter::Paren(syn::token::Paren(item_span)),
                        tokens: repr.into_syn_type(item_span).into_token_stream(),
                    }
                    .into(),
                });

                repr
            }
        };

        let impl_bitwise_for_item = BitwiseImpl { ident: item.ident.clone(), repr, variants };

        Ok(Output { item, impl_bitwise_for_item })
    }
}

/// Returns an [`Error`] if the given [`syn::Generics`] is non-empty.
///
/// The `bitwise` macro does not support generic items. This function ensures that the current item
/// is not generic.
fn check_generics(generics: &syn::Generics) -> Result<()> {
    let syn::Generics { params, where_clause, .. } = generics;
    if !params.is_empty() {
        return Err(err!(params.span(); "generics parameters are not supported in this context"));
    }
    if let Some(clause) = where_clause {
        return Err(err!(clause.span(); "`where` clauses are not supported in this context"));
    }

    Ok(())
}
