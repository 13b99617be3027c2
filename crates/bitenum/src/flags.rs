// SPDX-License-Identifier: MPL-2.0

//! The [`Flags`] value type.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    marker::PhantomData,
    slice,
};

use crate::{BitwiseEnum, Bits};

/// A combination of flags from the enum `E`.
///
/// This is the result of every bitwise operator on `E`. It has the exact layout of `E::Repr` and
/// may hold any bit pattern, including bits that no variant of `E` declares; complementing a value
/// flips every bit of the representation.
///
/// The second type parameter always defaults to `E::Repr` and should not be named explicitly. It
/// exists so that `const fn` forms of the operators can be written for each integer primitive.
///
/// Equality, ordering and hashing follow the underlying integer, so `Flags` values are usable as
/// keys in ordered and unordered collections.
#[repr(transparent)]
pub struct Flags<E, R = <E as BitwiseEnum>::Repr>
where
    E: BitwiseEnum,
{
    bits: R,
    _enum: PhantomData<E>,
}

impl<E, R> Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    /// Creates a `Flags` from raw bits, keeping bits that correspond to no variant.
    #[inline]
    pub const fn from_bits_retain(bits: R) -> Self {
        Self { bits, _enum: PhantomData }
    }

    /// Creates a `Flags` with no bits set.
    #[inline]
    pub const fn empty() -> Self {
        Self::from_bits_retain(R::ZERO)
    }

    /// The underlying representation.
    #[inline]
    pub const fn bits(&self) -> R {
        self.bits
    }

    /// Sets every bit of `other` in `self`.
    #[inline]
    pub fn insert(&mut self, other: impl Into<Self>) {
        self.bits |= other.into().bits;
    }

    /// Clears every bit of `other` in `self`.
    #[inline]
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.bits &= !other.into().bits;
    }

    /// Flips every bit of `other` in `self`.
    #[inline]
    pub fn toggle(&mut self, other: impl Into<Self>) {
        self.bits ^= other.into().bits;
    }

    /// Inserts `other` if `value` is `true`, and removes it otherwise.
    #[inline]
    pub fn set(&mut self, other: impl Into<Self>, value: bool) {
        if value {
            self.insert(other);
        } else {
            self.remove(other);
        }
    }

    /// Iterates over the declared variants of `E` whose bits are all set in `self`.
    ///
    /// Variants are yielded in declaration order. Variants whose representation is zero are never
    /// yielded.
    pub fn iter(&self) -> Iter<E> {
        Iter { variants: E::VARIANTS.iter(), bits: self.bits }
    }
}

/// Implements the `const fn` forms of the operators for the given integer primitives.
///
/// Operator traits cannot be called in a `const` context, so these exist alongside the operator
/// impls in the `ops` module.
macro_rules! impl_const_ops {
    ($($repr:ty),* $(,)?) => {
        $(
            impl<E: BitwiseEnum<Repr = $repr>> Flags<E, $repr> {
                /// The bitwise OR of `self` and `other`.
                #[inline]
                #[must_use]
                pub const fn union(self, other: Self) -> Self {
                    Self::from_bits_retain(self.bits | other.bits)
                }

                /// The bitwise AND of `self` and `other`.
                #[inline]
                #[must_use]
                pub const fn intersection(self, other: Self) -> Self {
                    Self::from_bits_retain(self.bits & other.bits)
                }

                /// The bitwise XOR of `self` and `other`.
                #[inline]
                #[must_use]
                pub const fn symmetric_difference(self, other: Self) -> Self {
                    Self::from_bits_retain(self.bits ^ other.bits)
                }

                /// The bits of `self` that are not set in `other`.
                #[inline]
                #[must_use]
                pub const fn difference(self, other: Self) -> Self {
                    Self::from_bits_retain(self.bits & !other.bits)
                }

                /// Flips every bit of the representation.
                ///
                /// The result is not masked to the declared variants.
                #[inline]
                #[must_use]
                pub const fn complement(self) -> Self {
                    Self::from_bits_retain(!self.bits)
                }

                /// Whether no bits are set.
                ///
                /// This is the logical NOT of a flag value. `!flags.is_empty()` tests whether any
                /// bit is set.
                #[inline]
                pub const fn is_empty(&self) -> bool {
                    self.bits == 0
                }

                /// Whether every bit of `other` is set in `self`.
                #[inline]
                pub const fn contains(&self, other: Self) -> bool {
                    self.bits & other.bits == other.bits
                }

                /// Whether any bit of `other` is set in `self`.
                #[inline]
                pub const fn intersects(&self, other: Self) -> bool {
                    self.bits & other.bits != 0
                }
            }
        )*
    };
}

impl_const_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<E: BitwiseEnum, R: Copy> Clone for Flags<E, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: BitwiseEnum, R: Copy> Copy for Flags<E, R> {}

impl<E, R> Default for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<E, R> PartialEq for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E, R> Eq for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
}

impl<E, R> PartialEq<E> for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn eq(&self, other: &E) -> bool {
        self.bits == other.to_repr()
    }
}

impl<E, R> PartialOrd for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E, R> Ord for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }
}

impl<E, R> Hash for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E, R> From<E> for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    #[inline]
    fn from(value: E) -> Self {
        Self::from_bits_retain(value.to_repr())
    }
}

impl<E, R> FromIterator<E> for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut output = Self::empty();
        output.extend(iter);

        output
    }
}

impl<E, R> Extend<E> for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}

impl<E, R> IntoIterator for Flags<E, R>
where
    E: BitwiseEnum<Repr = R>,
    R: Bits,
{
    type Item = E;
    type IntoIter = Iter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the contained variants by name, followed by any leftover bits in hexadecimal.
///
/// For example: `Flags(Read | Write)`, `Flags(Read | 0x80)`, or `Flags(0x0)`.
impl<E, R> fmt::Debug for Flags<E, R>
where
    E: BitwiseEnum<Repr = R> + fmt::Debug,
    R: Bits,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Flags(")?;

        let mut remaining = self.bits;
        let mut is_first = true;
        for variant in self.iter() {
            if !is_first {
                f.write_str(" | ")?;
            }
            is_first = false;
            write!(f, "{variant:?}")?;
            remaining &= !variant.to_repr();
        }
        if is_first || remaining != R::ZERO {
            if !is_first {
                f.write_str(" | ")?;
            }
            write!(f, "{remaining:#x}")?;
        }

        f.write_str(")")
    }
}

macro_rules! impl_fmt_forward {
    ($($fmt_trait:ident),* $(,)?) => {
        $(
            impl<E, R> fmt::$fmt_trait for Flags<E, R>
            where
                E: BitwiseEnum<Repr = R>,
                R: Bits,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt_trait::fmt(&self.bits, f)
                }
            }
        )*
    };
}

impl_fmt_forward!(Binary, Octal, LowerHex, UpperHex);

/// An iterator over the variants contained in a [`Flags`].
///
/// Created by [`Flags::iter`].
pub struct Iter<E: BitwiseEnum> {
    variants: slice::Iter<'static, E>,
    bits: E::Repr,
}

impl<E: BitwiseEnum> Clone for Iter<E> {
    fn clone(&self) -> Self {
        Self { variants: self.variants.clone(), bits: self.bits }
    }
}

impl<E: BitwiseEnum> Iterator for Iter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.bits;

        self.variants.by_ref().copied().find(|variant| {
            let repr = variant.to_repr();

            repr != <E::Repr as Bits>::ZERO && bits & repr == repr
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.variants.len()))
    }
}

impl<E: BitwiseEnum> FusedIterator for Iter<E> {}

/// The error returned when converting a [`Flags`] into a single variant fails.
///
/// The inner value holds the offending bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bits {0:#x} do not match exactly one variant")]
pub struct InvalidBits<R>(pub R);
