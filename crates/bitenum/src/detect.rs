// SPDX-License-Identifier: MPL-2.0

//! Answers "has this type opted into bitwise operators?" for concrete types.
//!
//! `Detect<T>` carries two associated constants named `IS_BITWISE`: a trait constant that is
//! always `false`, and an inherent constant that is `true` and only exists when `T: BitwiseEnum`.
//! Path resolution prefers the inherent constant, so `<Detect<T>>::IS_BITWISE` is `true` exactly
//! when the bound holds.
//!
//! This only works for concrete types. Inside `fn foo<T>()` the inherent constant never applies;
//! generic code should use the `T: BitwiseEnum` bound instead.

use core::marker::PhantomData;

use crate::BitwiseEnum;

#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

#[doc(hidden)]
pub trait BitwiseFallback {
    const IS_BITWISE: bool = false;
}

impl<T: ?Sized> BitwiseFallback for Detect<T> {}

impl<T: BitwiseEnum> Detect<T> {
    pub const IS_BITWISE: bool = true;
}

/// Evaluates to `true` if the given type has opted into bitwise operators, and `false` otherwise.
///
/// The result is a constant expression.
///
/// ```
/// #[bitenum::bitwise]
/// #[derive(Clone, Copy)]
/// enum Opted {
///     A = 1,
/// }
///
/// #[derive(Clone, Copy)]
/// enum Plain {
///     A = 1,
/// }
///
/// const OPTED: bool = bitenum::is_bitwise!(Opted);
/// assert!(OPTED);
/// assert!(!bitenum::is_bitwise!(Plain));
/// assert!(!bitenum::is_bitwise!(u8));
/// ```
///
/// Only concrete types are supported. In generic code, bound on
/// [`BitwiseEnum`](crate::BitwiseEnum) instead.
#[macro_export]
macro_rules! is_bitwise {
    ($ty:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::BitwiseFallback as _;

        <$crate::__private::Detect<$ty>>::IS_BITWISE
    }};
}
