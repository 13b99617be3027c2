// SPDX-License-Identifier: MPL-2.0

//! Operator impls.
//!
//! Operators on [`Flags`] are generic and live here. Operators on the enum itself cannot be written
//! generically (the enum is a foreign type from this crate's perspective), so [`bitwise`] emits an
//! invocation of `__bitwise_enum_ops!` for each opted-in enum.
//!
//! [`bitwise`]: crate::bitwise

use core::ops;

use crate::{BitwiseEnum, Bits, Flags};

/// Implements a binary operator and its assignment form for `Flags<E>` with right-hand sides of
/// both `Flags<E>` and `E`.
macro_rules! impl_bin_op {
    (
        op: $op:ident :: $op_fn:ident,
        assign: $assign:ident :: $assign_fn:ident,
        op_token: $op_token:tt $(,)?
    ) => {
        impl<E, R> ops::$op for Flags<E, R>
        where
            E: BitwiseEnum<Repr = R>,
            R: Bits,
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self::Output {
                Self::from_bits_retain(self.bits() $op_token rhs.bits())
            }
        }

        impl<E, R> ops::$op<E> for Flags<E, R>
        where
            E: BitwiseEnum<Repr = R>,
            R: Bits,
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: E) -> Self::Output {
                Self::from_bits_retain(self.bits() $op_token rhs.to_repr())
            }
        }

        impl<E, R> ops::$assign for Flags<E, R>
        where
            E: BitwiseEnum<Repr = R>,
            R: Bits,
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $op_token rhs;
            }
        }

        impl<E, R> ops::$assign<E> for Flags<E, R>
        where
            E: BitwiseEnum<Repr = R>,
            R: Bits,
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: E) {
                *self = *self $op_token rhs;
            }
        }
    };
}

impl_bin_op!(op: BitOr::bitor, assign: BitOrAssign::bitor_assign, op_token: |);
impl_bin_op!(op: BitAnd::bitand, assign: BitAndAssign::bitand_assign, op_token: &);
impl_bin_op!(op: BitXor::bitxor, assign: BitXorAssign::bitxor_assign, op_token: ^);

impl<E, R> ops::Not for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    type Output = Self;

    /// Flips every bit of the representation, including bits that no variant declares.
    #[inline]
    fn not(self) -> Self::Output {
        Self::from_bits_retain(!self.bits())
    }
}

/// Emits the operator impls and `const fn` helpers for one opted-in enum.
///
/// This is an implementation detail of [`bitwise`](crate::bitwise) and is not meant to be invoked
/// directly. `$ty` must already implement [`BitwiseEnum`] with `Repr = $repr`.
#[doc(hidden)]
#[macro_export]
macro_rules! __bitwise_enum_ops {
    (@bin $ty:ident, $op:ident :: $op_fn:ident) => {
        impl ::core::ops::$op for $ty {
            type Output = $crate::Flags<$ty>;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self::Output {
                ::core::ops::$op::$op_fn($crate::Flags::<$ty>::from(self), rhs)
            }
        }

        impl ::core::ops::$op<$crate::Flags<$ty>> for $ty {
            type Output = $crate::Flags<$ty>;

            #[inline]
            fn $op_fn(self, rhs: $crate::Flags<$ty>) -> Self::Output {
                ::core::ops::$op::$op_fn($crate::Flags::<$ty>::from(self), rhs)
            }
        }
    };
    ($ty:ident, $repr:ty $(,)?) => {
        impl $ty {
            /// The underlying representation of this value.
            #[inline]
            #[allow(dead_code)]
            pub const fn bits(self) -> $repr {
                self as $repr
            }

            /// This value as a `Flags`, usable in `const` contexts.
            #[inline]
            #[allow(dead_code)]
            pub const fn flags(self) -> $crate::Flags<Self> {
                $crate::Flags::from_bits_retain(self as $repr)
            }
        }

        $crate::__bitwise_enum_ops!(@bin $ty, BitOr::bitor);
        $crate::__bitwise_enum_ops!(@bin $ty, BitAnd::bitand);
        $crate::__bitwise_enum_ops!(@bin $ty, BitXor::bitxor);

        impl ::core::ops::Not for $ty {
            type Output = $crate::Flags<$ty>;

            #[inline]
            fn not(self) -> Self::Output {
                !$crate::Flags::<$ty>::from(self)
            }
        }

        impl ::core::cmp::PartialEq<$crate::Flags<$ty>> for $ty {
            #[inline]
            fn eq(&self, other: &$crate::Flags<$ty>) -> bool {
                other == self
            }
        }

        impl ::core::convert::TryFrom<$crate::Flags<$ty>> for $ty {
            type Error = $crate::InvalidBits<$repr>;

            fn try_from(flags: $crate::Flags<$ty>) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::BitwiseEnum>::from_repr(flags.bits())
                    .ok_or($crate::InvalidBits(flags.bits()))
            }
        }
    };
}
