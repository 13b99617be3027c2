// SPDX-License-Identifier: MPL-2.0

//! Opt-in bitwise operators for flag-style enums.
//!
//! Apply [`bitwise`] to a fieldless enum and its values gain `|`, `&`, `^` and `!`. Combined values
//! are [`Flags`], a value type with the exact layout of the enum's representation. Values of two
//! different flag enums, or a flag enum and a raw integer, never combine.
//!
//! ```
//! use bitenum::Flags;
//!
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Perm {
//!     Read = 0b001,
//!     Write = 0b010,
//!     Exec = 0b100,
//! }
//!
//! let rw: Flags<Perm> = Perm::Read | Perm::Write;
//! assert_eq!(rw.bits(), 0b011);
//! assert!(rw.contains(Perm::Write.flags()));
//! assert_eq!(rw & !Perm::Write, Perm::Read);
//! assert!((rw & Perm::Exec).is_empty());
//! ```
//!
//! Refer to the [`spec`] module for the full behavior of the attribute.

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod spec;

mod bits;
mod detect;
mod flags;
mod ops;

pub use bitenum_internals::bitwise;
pub use bits::Bits;
pub use flags::{Flags, InvalidBits, Iter};

#[doc(hidden)]
pub mod __private {
    pub use crate::detect::{BitwiseFallback, Detect};
}

/// A flag-style enum that has opted into bitwise operators.
///
/// Implemented by [`bitwise`]. In generic code, `E: BitwiseEnum` is the capability every operator
/// and every [`Flags`] API is gated on. For a concrete type, [`is_bitwise!`] answers the same
/// question as a `bool` constant.
pub trait BitwiseEnum: Copy + 'static {
    /// The integer primitive that represents this type in-memory.
    type Repr: Bits;

    /// Every declared variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Reinterprets this value as its underlying representation.
    fn to_repr(self) -> Self::Repr;

    /// Returns the declared variant whose representation is exactly `repr`, if any.
    fn from_repr(repr: Self::Repr) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|it| it.to_repr() == repr)
    }
}
