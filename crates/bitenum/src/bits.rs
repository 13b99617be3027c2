// SPDX-License-Identifier: MPL-2.0

//! Integer primitives that may back a [`BitwiseEnum`](crate::BitwiseEnum).

use core::{fmt, hash::Hash, ops};

mod sealed {
    pub trait Sealed {}
}

/// An integer primitive usable as [`BitwiseEnum::Repr`](crate::BitwiseEnum::Repr).
///
/// This trait is sealed. It is implemented for every signed and unsigned integer primitive and
/// nothing else.
pub trait Bits:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Binary
    + fmt::Octal
    + fmt::LowerHex
    + fmt::UpperHex
    + ops::BitOr<Output = Self>
    + ops::BitAnd<Output = Self>
    + ops::BitXor<Output = Self>
    + ops::Not<Output = Self>
    + ops::BitOrAssign
    + ops::BitAndAssign
    + ops::BitXorAssign
    + 'static
{
    /// The value with no bits set.
    const ZERO: Self;
}

macro_rules! impl_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Bits for $ty {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
