// SPDX-License-Identifier: MPL-2.0

//! Types modeling integer primitives and the discriminants they hold.

use super::*;

/// The bit-width of an integer primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Width {
    /// One of 8, 16, 32, 64, or 128.
    Fixed(u32),
    /// The width of a pointer: `usize` or `isize`.
    Pointer,
}

/// Models an integer primitive that exists in Rust: `u8` through `u128`, `usize`, `i8` through
/// `i128`, or `isize`.
///
/// This type is not [spanned].
///
/// [spanned]: Span2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntType {
    is_signed: bool,
    width: Width,
}

/// Fixed widths in ascending order.
const FIXED_WIDTHS: [u32; 5] = [8, 16, 32, 64, 128];

impl IntType {
    /// Attempts to parse an `IntType` from a [`syn::Ident`].
    ///
    /// This returns `None` if `ident` does not name an integer primitive.
    pub(crate) fn parse(ident: &syn::Ident) -> Option<Self> {
        let ident = ident.to_string();
        let (is_signed, width) = if let Some(width) = ident.strip_prefix('u') {
            (false, width)
        } else {
            (true, ident.strip_prefix('i')?)
        };
        let width = match width {
            "size" => Width::Pointer,
            width => Width::Fixed(width.parse().ok().filter(|it| FIXED_WIDTHS.contains(it))?),
        };

        Some(Self { is_signed, width })
    }

    /// Finds the integer primitive named by a `#[repr]` attribute among `attrs`.
    ///
    /// This returns `Ok(None)` if there is no `#[repr]` attribute.
    ///
    /// # Errors
    ///
    /// An error is returned if a `#[repr]` attribute is malformed, contains a hint other than an
    /// integer primitive (e.g., `C`, which conflicts with an integer primitive on a fieldless
    /// enum), or if the `#[repr]` attributes do not name exactly one integer primitive.
    pub(crate) fn from_repr_attrs(attrs: &[syn::Attribute]) -> Result<Option<Self>> {
        let mut found = None;

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
            let hints = attr
                .parse_args_with(Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated)
                .map_err(Error)?;
            if hints.is_empty() {
                return Err(err!(attr.span(); "`#[repr]` must name an integer primitive"));
            }

            for hint in hints.iter() {
                let ty = match hint {
                    syn::Meta::Path(path) => path.get_ident().and_then(Self::parse),
                    _ => None,
                };
                let Some(ty) = ty else {
                    return Err(err!(hint.span(); "`#[repr]` must name an integer primitive"));
                };
                if found.replace(ty).is_some() {
                    return Err(err!(hint.span(); "`#[repr]` must name only one integer primitive"));
                }
            }
        }

        Ok(found)
    }

    /// Determines the narrowest integer primitive that can hold every discriminant in `range`.
    ///
    /// Unsigned primitives are preferred when no discriminant is negative. Pointer-sized primitives
    /// are never chosen.
    pub(crate) fn narrowest_for(range: &DiscrimRange) -> Option<Self> {
        let is_signed = range.min_negative.is_some();

        FIXED_WIDTHS.into_iter().map(|width| Self { is_signed, width: Width::Fixed(width) }).find(
            |ty| {
                let Width::Fixed(width) = ty.width else {
                    return false;
                };
                if is_signed {
                    // The positive range of a signed primitive is one bit narrower, and its
                    // negative range reaches one further.
                    let limit = 1u128 << (width - 1);
                    range.max_positive < limit
                        && range.min_negative.map_or(true, |magnitude| magnitude <= limit)
                } else {
                    width == 128 || range.max_positive < (1u128 << width)
                }
            },
        )
    }

    /// Converts this into a [`syn::Type`] with the given span.
    pub(crate) fn into_syn_type(self, span: Span2) -> syn::Type {
        ty_path!(syn::Ident::new(&self.to_string(), span))
    }
}

impl fmt::Display for IntType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_signed { 'i' } else { 'u' };
        match self.width {
            Width::Fixed(width) => write!(f, "{sign}{width}"),
            Width::Pointer => write!(f, "{sign}size"),
        }
    }
}

/// The value of an enum discriminant.
///
/// Negative values are stored as their magnitude so that the full range of both `u128` and `i128`
/// discriminants can be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Discrim {
    is_negative: bool,
    magnitude: u128,
}

impl Discrim {
    /// The discriminant of the first variant when none is given explicitly.
    pub(crate) const ZERO: Self = Self { is_negative: false, magnitude: 0 };

    /// Attempts to evaluate a discriminant expression.
    ///
    /// Only integer literals, optionally negated, are understood.
    ///
    /// # Errors
    ///
    /// An error is returned if `expr` is any other kind of expression or the literal does not fit
    /// in 128 bits.
    pub(crate) fn eval(expr: &syn::Expr) -> Result<Self> {
        const MSG: &str = "discriminant must be an integer literal unless `#[repr]` names an \
                           integer primitive";

        let (is_negative, expr) = match expr {
            syn::Expr::Unary(syn::ExprUnary { op: syn::UnOp::Neg(_), expr, .. }) => (true, &**expr),
            expr => (false, expr),
        };
        let syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) = expr else {
            return Err(err!(expr.span(); "{}", MSG));
        };
        let magnitude = lit.base10_parse::<u128>().map_err(Error)?;

        Ok(Self { is_negative: is_negative && magnitude != 0, magnitude })
    }

    /// The discriminant of the variant following one with this discriminant, if it is implicit.
    pub(crate) fn next(self) -> Option<Self> {
        if self.is_negative {
            let magnitude = self.magnitude - 1;

            Some(Self { is_negative: magnitude != 0, magnitude })
        } else {
            Some(Self { is_negative: false, magnitude: self.magnitude.checked_add(1)? })
        }
    }
}

/// The extremes of a set of discriminants.
#[derive(Default)]
pub(crate) struct DiscrimRange {
    /// The greatest non-negative discriminant, or 0 if there is none.
    max_positive: u128,
    /// The magnitude of the least negative discriminant, if there is one.
    min_negative: Option<u128>,
}

impl DiscrimRange {
    /// Widens this range to include `discrim`.
    pub(crate) fn include(&mut self, discrim: Discrim) {
        if discrim.is_negative {
            self.min_negative = Some(self.min_negative.map_or(discrim.magnitude, |it| {
                it.max(discrim.magnitude)
            }));
        } else {
            self.max_positive = self.max_positive.max(discrim.magnitude);
        }
    }
}
