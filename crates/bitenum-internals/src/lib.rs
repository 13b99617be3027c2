// SPDX-License-Identifier: MPL-2.0

//! Implementation details for [bitenum].
//!
//! This crate provides the [`bitwise!`] attribute macro that is re-exported by the main *bitenum*
//! crate.
//!
//! [bitenum]: https://crates.io/crates/bitenum

#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

/// A type alias for [`Result<T, E>`] where `E` is [`Error`].
///
/// [`Result<T, E>`]: std::result::Result
type Result<T> = std::result::Result<T, Error>;

/// The error type returned by fallible functions in *bitenum-internals*.
///
/// This is a wrapper over [`syn::Error`] and is convertible into [`TokenStream`] via a [`From`]
/// implementation.
struct Error(syn::Error);

impl From<Error> for TokenStream {
    fn from(e: Error) -> Self {
        e.0.into_compile_error().into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Creates an [`Error`] with the given message and, optionally, span.
///
/// The syntax of this macro is similar to that of [`format!`] except that the format string may be
/// preceded by a span expression and semicolon (e.g., `span;`). The span of the error message is
/// the span expression, if present, or [`Span2::call_site`] otherwise.
///
/// # Examples
///
/// ```ignore
/// # fn main() -> Result<(), Error> {
/// let item: syn::ItemEnum;
/// # item = syn::parse_quote!(enum A {});
/// return Err(err!(item.ident.span(); "enum `{}` must have at least one variant", item.ident));
/// # }
/// ```
macro_rules! err {
    ($fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        err!(Span2::call_site(); $fmt $(, $fmt_arg)*)
    };
    ($span:expr ; $fmt:expr $(, $fmt_arg:expr)* $(,)?) => {
        Error(syn::Error::new($span, format!($fmt $(, $fmt_arg)*)))
    };
}

/// Creates a [`syn::Path`] from the given path and span.
///
/// This macro accepts a span expression, semicolon ';', and path, in that order.
///
/// # Examples
///
/// ```ignore
/// let span: Span2;
/// # span = Span2::call_site();
/// let paths: [syn::Path; 3] = [
///     path!(span; repr),
///     path!(span; Self::Repr),
///     path!(span; ::bitenum),
/// ];
/// ```
macro_rules! path {
    // Case for identifiers and paths without leading colons.
    ($span:expr ; $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: None,
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Case for paths with leading colons `::`.
    ($span:expr ; :: $head_seg:ident $(:: $tail_seg:ident)*) => {
        path!(@internal => {
            span: $span,
            leading_colon: Some(syn::Token![::]($span)),
            segments: $head_seg $($tail_seg)*,
        })
    };
    // Implementation detail.
    (@internal => {
        span: $span:expr,
        leading_colon: $leading_colon:expr,
        segments: $($seg:ident)* $(,)?
    }) => {
        syn::Path {
            leading_colon: $leading_colon,
            segments: [$(stringify!($seg)),*]
                .into_iter()
                .map(|seg| syn::PathSegment::from(syn::Ident::new(seg, $span)))
                .collect(),
        }
    };
}

/// Creates an implementor of `From<syn::TypePath>`.
///
/// This macro offers two syntaxes: one equivalent to [`path!`], and one that accepts an expression
/// implementing `Into<syn::Path>`.
macro_rules! ty_path {
    ($span:expr ; $($path_piece:tt)*) => {
        syn::TypePath { qself: None, path: path!($span; $($path_piece)*) }.into()
    };
    ($path:expr $(,)?) => {
        syn::TypePath { qself: None, path: $path.into() }.into()
    }
}

/// Appends one segment to a copy of `base`.
///
/// This is used to name items inside the runtime crate, whose path is configurable with the
/// `crate` argument.
fn join_path(base: &syn::Path, span: Span2, seg: &str) -> syn::Path {
    let mut path = base.clone();
    path.segments.push(syn::PathSegment::from(syn::Ident::new(seg, span)));

    path
}

mod r#enum;
mod repr;

use std::fmt;

use proc_macro::TokenStream;
use proc_macro2::Span as Span2;
use r#enum::Enum;
use repr::IntType;
use syn::{__private::ToTokens, parse::Parser as _, punctuated::Punctuated, spanned::Spanned as _};

/// Opts an enum into bitwise operators.
///
/// Refer to the `spec` module in the crate root for usage information.
#[proc_macro_attribute]
pub fn bitwise(args: TokenStream, item: TokenStream) -> TokenStream {
    match expand(args.into(), item.into()) {
        Ok(it) => it.into(),
        Err(e) => e.into(),
    }
}

/// Like [`bitwise`], but operating on [`proc_macro2::TokenStream`]s.
fn expand(
    args: proc_macro2::TokenStream,
    item: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream> {
    let args = Args::parse2(args)?;

    match syn::parse2(item).map_err(Error)? {
        syn::Item::Enum(item) => Enum::bitwise(item).map(|output| output.into_token_stream(&args)),
        item => Err(err!(item.span(); "item must be an enum")),
    }
}

/// Models acceptable arguments to the `#[bitwise]` attribute.
struct Args {
    /// The path to the runtime crate.
    ///
    /// This is the `crate` argument if present, or `::bitenum` otherwise.
    krate: syn::Path,
}

impl Default for Args {
    fn default() -> Self {
        Self { krate: path!(Span2::call_site(); ::bitenum) }
    }
}

impl Args {
    /// Parses comma-separated arguments to the `#[bitwise]` attribute from the given
    /// [`proc_macro2::TokenStream`].
    ///
    /// # Errors
    ///
    /// An error is returned if any argument
    ///
    /// - is not of the form `"name" "=" "value"` (ABNF);
    /// - has a name other than `crate`;
    /// - has the same name as a previous argument; or
    /// - has a value that is not a path.
    fn parse2(args: proc_macro2::TokenStream) -> Result<Self> {
        let mut krate = None;

        if args.is_empty() {
            return Ok(Self::default());
        }

        syn::meta::parser(|meta| {
            if !meta.path.is_ident("crate") {
                return Err(meta.error("argument is not supported"));
            }
            if krate.is_some() {
                return Err(meta.error("argument is a duplicate"));
            }
            krate = Some(meta.value()?.parse::<syn::Path>()?);

            Ok(())
        })
        .parse2(args)
        .map_err(Error)?;

        Ok(krate.map(|krate| Self { krate }).unwrap_or_default())
    }
}

/// Implements the [`bitwise!`] macro for one kind of item.
trait Form {
    /// The kind of item that this form of [`bitwise!`] operates on.
    type Item;

    /// A form of [`bitwise!`].
    fn bitwise(item: Self::Item) -> Result<Output<Self::Item>>;
}

/// The output of [`Form::bitwise`].
struct Output<Item> {
    /// The emitted item.
    item: Item,
    /// The implementation of the `BitwiseEnum` trait for [the emitted item].
    ///
    /// [the emitted item]: Self::item
    impl_bitwise_for_item: BitwiseImpl,
}

impl<Item: ToTokens> Output<Item> {
    /// Converts this into a [`proc_macro2::TokenStream`].
    ///
    /// The emitted tokens are, in order, the item, its `BitwiseEnum` implementation, and an
    /// invocation of the runtime crate's operator macro.
    fn into_token_stream(self, args: &Args) -> proc_macro2::TokenStream {
        let item_span = self.item.span();
        let ops_item = self.impl_bitwise_for_item.make_ops_item(&args.krate, item_span);
        let impl_bitwise_for_item = self.impl_bitwise_for_item.into_item_impl(&args.krate, item_span);

        let mut tokens = self.item.into_token_stream();
        impl_bitwise_for_item.to_tokens(&mut tokens);
        ops_item.to_tokens(&mut tokens);

        tokens
    }
}

/// A variant listed in `BitwiseEnum::VARIANTS`.
struct Variant {
    /// The `#[cfg]` attributes of the variant, which are repeated on its array element.
    cfg_attrs: Vec<syn::Attribute>,
    /// The name of the variant.
    ident: syn::Ident,
}

/// An implementation of the `BitwiseEnum` trait.
struct BitwiseImpl {
    /// The name of the implementor.
    ident: syn::Ident,
    /// The underlying representation of the implementor.
    repr: IntType,
    /// Every variant of the implementor, in declaration order.
    variants: Vec<Variant>,
}

impl BitwiseImpl {
    /// Converts this into a [`syn::ItemImpl`] with the given span.
    ///
    /// `krate` is the path to the runtime crate.
    fn into_item_impl(self, krate: &syn::Path, span: Span2) -> syn::ItemImpl {
        let and_token = syn::Token![&](span);
        let brace_token = syn::token::Brace(span);
        let colon_token = syn::Token![:](span);
        let eq_token = syn::Token![=](span);
        let semi_token = syn::Token![;](span);

        // Rendered:
        //   type Repr = /* self.repr */;
        let repr_item = syn::ImplItemType {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            type_token: syn::Token![type](span),
            ident: syn::Ident::new("Repr", span),
            generics: Default::default(),
            eq_token,
            ty: self.repr.into_syn_type(span),
            semi_token,
        }
        .into();

        // Rendered:
        //   &[Self::A, Self::B, /* ... */]
        let variants_expr = syn::ExprReference {
            attrs: vec![],
            and_token,
            mutability: None,
            expr: Box::new(
                syn::ExprArray {
                    attrs: vec![],
                    bracket_token: syn::token::Bracket(span),
                    elems: self
                        .variants
                        .into_iter()
                        .map(|Variant { cfg_attrs, ident }| {
                            let mut path = path!(span; Self);
                            path.segments.push(syn::PathSegment::from(ident));

                            syn::Expr::Path(syn::ExprPath { attrs: cfg_attrs, qself: None, path })
                        })
                        .collect(),
                }
                .into(),
            ),
        };
        // Rendered:
        //   const VARIANTS: &'static [Self] = /* variants_expr */;
        let variants_item = syn::ImplItemConst {
            attrs: vec![],
            vis: syn::Visibility::Inherited,
            defaultness: None,
            const_token: syn::Token![const](span),
            ident: syn::Ident::new("VARIANTS", span),
            generics: Default::default(),
            colon_token,
            ty: syn::TypeReference {
                and_token,
                lifetime: Some(syn::Lifetime::new("'static", span)),
                mutability: None,
                elem: Box::new(
                    syn::TypeSlice {
                        bracket_token: syn::token::Bracket(span),
                        elem: Box::new(ty_path!(span; Self)),
                    }
                    .into(),
                ),
            }
            .into(),
            eq_token,
            expr: variants_expr.into(),
            semi_token,
        }
        .into();

        let to_repr_item: syn::ImplItem = syn::parse_quote_spanned! {span=>
            fn to_repr(self) -> Self::Repr {
                self as _
            }
        };

        // Rendered:
        //   impl #krate::BitwiseEnum for /* self.ident */ {
        //       #repr_item
        //       #variants_item
        //       #to_repr_item
        //   }
        syn::ItemImpl {
            attrs: vec![],
            defaultness: None,
            unsafety: None,
            impl_token: syn::Token![impl](span),
            generics: Default::default(),
            trait_: Some((None, join_path(krate, span, "BitwiseEnum"), syn::Token![for](span))),
            self_ty: Box::new(ty_path!(self.ident)),
            brace_token,
            items: vec![repr_item, variants_item, to_repr_item],
        }
    }

    /// Creates the invocation of the runtime crate's operator macro.
    ///
    /// Rendered:
    ///
    /// ```ignore
    /// #krate::__bitwise_enum_ops!(#ident, #repr);
    /// ```
    fn make_ops_item(&self, krate: &syn::Path, span: Span2) -> syn::ItemMacro {
        let args: Punctuated<syn::Type, syn::Token![,]> =
            Punctuated::from_iter([ty_path!(self.ident.clone()), self.repr.into_syn_type(span)]);

        syn::ItemMacro {
            attrs: vec![],
            ident: None,
            mac: syn::Macro {
                path: join_path(krate, span, "__bitwise_enum_ops"),
                bang_token: syn::Token![!](span),
                delimiter: syn::MacroDelimiter::Paren(syn::token::Paren(span)),
                tokens: args.into_token_stream(),
            },
            semi_token: Some(syn::Token![;](span)),
        }
    }
}
