// SPDX-License-Identifier: MPL-2.0

//! A documentation-only module that explains how to use [`bitwise`].
//!
//! [`bitwise`]: crate::bitwise
//!
//! Supporting items exported by bitenum, including the [`BitwiseEnum`] trait and the [`Flags`]
//! type, are documented separately.
//!
//! [`BitwiseEnum`]: crate::BitwiseEnum
//! [`Flags`]: crate::Flags
//!
//! ## Syntax
//!
//! `bitwise` accepts an enum item, validates it against the syntactical rules below, and re-emits
//! it along with its bitwise operators. The rules are notated in a modified [Augmented Backus-Naur
//! Form] where <code>%r"<em>rule</em>"</code> is a rule from [The Rust Reference].
//!
//! [Augmented Backus-Naur Form]: https://en.wikipedia.org/wiki/Augmented_Backus%E2%80%93Naur_form
//! [The Rust Reference]: https://doc.rust-lang.org/reference/
//!
//! ```abnf
//! item-attr = bitwise-attr / %r"OuterAttribute"
//! bitwise-attr = "#[" "bitwise" [bitwise-attr-input] "]"
//! bitwise-attr-input = "(" [crate-arg [","]] ")"
//! crate-arg = "crate" "=" %r"SimplePath"
//!
//! enum-item = 1*item-attr %r"Visibility" "enum" %r"IDENTIFIER" enum-body
//! ; Note: generic parameters and `where` clauses are not supported.
//! enum-body = "{" *(variant ",") variant [","] "}"
//! ; Note: variants cannot contain fields.
//! variant = *%r"OuterAttribute" %r"IDENTIFIER" ["=" %r"Expression"]
//! ```
//!
//! ## Semantics
//!
//! ### Representation
//!
//! The underlying representation of the enum is an integer primitive. If the enum carries a
//! `#[repr]` attribute naming one, as in `#[repr(u16)]`, that primitive is used and discriminants
//! may be any constant expression. No other hint may accompany it; `#[repr(C, u16)]` is rejected.
//!
//! Otherwise every explicit discriminant must be an integer literal, optionally negated, and
//! `bitwise` picks the narrowest primitive that holds every discriminant: unsigned if none is
//! negative, signed otherwise. A matching `#[repr]` attribute is added to the emitted enum.
//!
//! ### Operators
//!
//! With `E` the enum and `Flags<E>` the [combined value type](crate::Flags):
//!
//! - `|`, `&` and `^` accept any mix of `E` and `Flags<E>` operands and produce `Flags<E>`.
//! - `!` on `E` or `Flags<E>` flips every bit of the representation and produces `Flags<E>`. The
//!   result is not masked: it may contain bits that no variant declares.
//! - `|=`, `&=` and `^=` are available on `Flags<E>`, with a right-hand side of `E` or `Flags<E>`.
//! - `Flags::is_empty` is the logical NOT; `!flags.is_empty()` tests for any set bit. Neither `E`
//!   nor `Flags<E>` converts to `bool`.
//! - `Flags<E> == E` and `E == Flags<E>` compare representations.
//!
//! No arithmetic or shift operators are emitted.
//!
//! Operators cannot be called in a `const` context. Every operation has a `const fn` form instead:
//!
//! ```
//! use bitenum::Flags;
//!
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Foo {
//!     Foo0 = 0b00,
//!     Foo1 = 0b01,
//!     Foo2 = 0b10,
//! }
//!
//! const FOO3: Flags<Foo> = Foo::Foo1.flags().union(Foo::Foo2.flags());
//! const _: () = assert!(FOO3.intersects(Foo::Foo1.flags()));
//! const _: () = assert!(FOO3.intersection(Foo::Foo2.flags().complement()).bits() == Foo::Foo1.bits());
//! const _: () = assert!(!Foo::Foo1.flags().is_empty());
//! const _: () = assert!(Foo::Foo0.flags().is_empty());
//! ```
//!
//! ### Type safety
//!
//! Operators require both operands to carry the same enum. Mixing with a raw integer does not
//! compile:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Foo {
//!     Foo1 = 0b01,
//! }
//!
//! let _ = Foo::Foo1 | 0b01;
//! ```
//!
//! Nor does mixing two different flag enums:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Foo {
//!     Foo1 = 0b01,
//! }
//!
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Bar {
//!     Bar1 = 0b01,
//! }
//!
//! let _ = Foo::Foo1 | Bar::Bar1;
//! ```
//!
//! ```compile_fail
//! # #[bitenum::bitwise]
//! # #[derive(Clone, Copy)]
//! # enum Foo {
//! #     Foo1 = 0b01,
//! # }
//! # #[bitenum::bitwise]
//! # #[derive(Clone, Copy)]
//! # enum Bar {
//! #     Bar1 = 0b01,
//! # }
//! let mut foo = bitenum::Flags::<Foo>::empty();
//! foo |= Bar::Bar1;
//! ```
//!
//! An enum that never opted in has no bitwise operators at all:
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Plain {
//!     A = 0b01,
//!     B = 0b10,
//! }
//!
//! let _ = Plain::A | Plain::B;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Plain {
//!     A = 0b01,
//! }
//!
//! let _ = !Plain::A;
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy)]
//! enum Plain {
//!     A = 0b01,
//! }
//!
//! let _ = bitenum::Flags::<Plain>::empty();
//! ```
//!
//! Arithmetic and shifts are never provided:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Foo {
//!     Foo1 = 0b01,
//!     Foo2 = 0b10,
//! }
//!
//! let _ = Foo::Foo1 + Foo::Foo2;
//! ```
//!
//! ```compile_fail
//! # #[bitenum::bitwise]
//! # #[derive(Clone, Copy)]
//! # enum Foo {
//! #     Foo1 = 0b01,
//! # }
//! let _ = Foo::Foo1.flags() << 1;
//! ```
//!
//! Truthiness tests do not compile:
//!
//! ```compile_fail
//! # #[bitenum::bitwise]
//! # #[derive(Clone, Copy)]
//! # enum Foo {
//! #     Foo1 = 0b01,
//! # }
//! if Foo::Foo1.flags() {}
//! ```
//!
//! ### Opting in
//!
//! `bitwise` may be applied once per enum. Applying it to anything other than an enum fails:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! struct NotAnEnum(u8);
//! ```
//!
//! Applying it twice to the same enum produces conflicting implementations:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! enum Twice {
//!     A = 1,
//! }
//! ```
//!
//! A `#[repr]` must name exactly one integer primitive and nothing else:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! #[derive(Clone, Copy)]
//! #[repr(C, u16)]
//! enum WithC {
//!     A = 1,
//! }
//! ```
//!
//! The enum must be `Copy`:
//!
//! ```compile_fail
//! #[bitenum::bitwise]
//! enum NotCopy {
//!     A = 1,
//! }
//! ```
//!
//! ### Ordering and hashing
//!
//! `bitwise` adds no comparison or hashing impls to the enum. Whatever the enum derives is kept as
//! is, so opted-in enums remain usable as keys in ordered and unordered collections. [`Flags`]
//! compares and hashes by its representation.
//!
//! [`Flags`]: crate::Flags
//!
//! ## Output
//!
//! `bitwise` produces:
//!
//! - the `enum` definition, with a `#[repr]` attribute added if it had none;
//! - an `impl ::bitenum::BitwiseEnum` block;
//! - an invocation of a hidden `macro_rules!` macro that emits the operator impls, the `const fn`
//!   helpers `bits` and `flags`, `PartialEq<Flags<E>>`, and `TryFrom<Flags<E>>`.
//!
//! The `crate` argument replaces the `::bitenum` path in the emitted code, for use when bitenum is
//! re-exported under another name.
