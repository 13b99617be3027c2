// SPDX-License-Identifier: MPL-2.0

use bitenum::{BitwiseEnum, Flags, InvalidBits};

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Foo {
    Foo0 = 0b00,
    Foo1 = 0b01,
    Foo2 = 0b10,
}

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
enum Wide {
    Low = 0x00ff,
    High = 0xff00,
    Top = 0x8000,
}

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Signed {
    Neg = -128,
    One = 1,
    Two = 2,
}

#[test]
fn combines_like_the_underlying_integer() {
    let pairs = [(Foo::Foo0, Foo::Foo1), (Foo::Foo1, Foo::Foo2), (Foo::Foo2, Foo::Foo2)];
    for (a, b) in pairs {
        let (x, y) = (a as u8, b as u8);
        assert_eq!((a | b).bits(), x | y);
        assert_eq!((a & b).bits(), x & y);
        assert_eq!((a ^ b).bits(), x ^ y);
    }

    let (a, b) = (Wide::Low | Wide::Top, Wide::High);
    assert_eq!((a | b).bits(), 0x80ff | 0xff00);
    assert_eq!((a & b).bits(), 0x80ff & 0xff00);
    assert_eq!((a ^ b).bits(), 0x80ff ^ 0xff00);
}

#[test]
fn mixes_enum_and_flags_operands() {
    let flags = Foo::Foo1.flags();

    assert_eq!((flags | Foo::Foo2).bits(), 0b11);
    assert_eq!((Foo::Foo2 | flags).bits(), 0b11);
    assert_eq!((flags & Foo::Foo1).bits(), 0b01);
    assert_eq!((Foo::Foo2 & flags).bits(), 0b00);
    assert_eq!((flags ^ Foo::Foo1).bits(), 0b00);
    assert_eq!((Foo::Foo2 ^ flags).bits(), 0b11);
}

#[test]
fn combines_two_flags() {
    let foo3 = Foo::Foo1 | Foo::Foo2;

    assert_eq!(foo3.bits(), 0b11);
    assert_eq!(foo3 & !Foo::Foo2, Foo::Foo1);
    assert_eq!(Foo::Foo1, foo3 & !Foo::Foo2);
    assert!(!(foo3 & Foo::Foo1).is_empty());
}

#[test]
fn complement_keeps_undeclared_bits() {
    let complement = !Foo::Foo1;
    assert_eq!(complement.bits(), 0b1111_1110);
    assert_eq!(!Foo::Foo0, Flags::<Foo>::from_bits_retain(u8::MAX));
    assert_eq!((!Signed::One).bits(), !1i8);

    for flags in [Foo::Foo0.flags(), Foo::Foo1.flags(), Foo::Foo1 | Foo::Foo2, !Foo::Foo2] {
        assert_eq!(!!flags, flags);
    }
}

#[test]
fn is_empty_is_logical_not() {
    assert!(Foo::Foo0.flags().is_empty());
    assert!(Flags::<Foo>::empty().is_empty());
    assert!(!Foo::Foo1.flags().is_empty());
    assert!(!(Foo::Foo1 | Foo::Foo2).is_empty());
    assert!((Foo::Foo1 & Foo::Foo2).is_empty());
    assert!(!Signed::Neg.flags().is_empty());
}

#[test]
fn assignment_mutates_only_lhs() {
    let rhs = Foo::Foo2.flags();

    let mut lhs = Foo::Foo1.flags();
    lhs |= rhs;
    assert_eq!(lhs, Foo::Foo1 | rhs);
    assert_eq!(rhs, Foo::Foo2);

    let mut lhs = Foo::Foo1 | Foo::Foo2;
    lhs &= Foo::Foo2;
    assert_eq!(lhs, Foo::Foo2);

    let mut lhs = Foo::Foo1 | Foo::Foo2;
    let before = lhs;
    lhs ^= rhs;
    assert_eq!(lhs, before ^ rhs);
    lhs ^= Foo::Foo1;
    assert!(lhs.is_empty());
    assert_eq!(rhs, Foo::Foo2);
}

#[test]
fn set_operations() {
    let mut flags = Flags::<Wide>::empty();
    flags.insert(Wide::Low);
    flags.insert(Wide::Top | Wide::Low);
    assert_eq!(flags.bits(), 0x80ff);
    assert!(flags.contains(Wide::Top.flags()));
    assert!(!flags.contains(Wide::High.flags()));
    assert!(flags.intersects(Wide::High.flags()));

    flags.remove(Wide::Low);
    assert_eq!(flags, Wide::Top);
    flags.toggle(Wide::High);
    assert_eq!(flags.bits(), 0x7f00);
    flags.set(Wide::Low, true);
    flags.set(Wide::High, false);
    assert_eq!(flags, Wide::Low);

    let all = Wide::Low | Wide::High;
    assert_eq!(all.difference(Wide::High.flags()), Wide::Low);
    assert_eq!(all.union(Wide::Top.flags()), all);
    assert_eq!(all.symmetric_difference(Wide::Top.flags()).bits(), 0x7fff);
}

#[test]
fn iterates_contained_variants() {
    let flags = Wide::Low | Wide::Top;
    assert_eq!(flags.iter().collect::<Vec<_>>(), [Wide::Low, Wide::Top]);

    let all: Flags<Wide> = [Wide::High, Wide::Low].into_iter().collect();
    assert_eq!(all.into_iter().collect::<Vec<_>>(), [Wide::Low, Wide::High, Wide::Top]);

    // Zero-valued variants are never yielded.
    assert_eq!((!Foo::Foo0).iter().collect::<Vec<_>>(), [Foo::Foo1, Foo::Foo2]);
    assert_eq!(Flags::<Foo>::empty().iter().count(), 0);
}

#[test]
fn converts_back_to_a_single_variant() {
    assert_eq!(Foo::try_from(Foo::Foo2.flags()), Ok(Foo::Foo2));
    assert_eq!(Foo::try_from(Flags::<Foo>::empty()), Ok(Foo::Foo0));
    assert_eq!(Foo::try_from(Foo::Foo1 | Foo::Foo2), Err(InvalidBits(0b11)));
    assert_eq!(Signed::try_from(Signed::Neg.flags()), Ok(Signed::Neg));

    assert_eq!(Foo::from_repr(0b10), Some(Foo::Foo2));
    assert_eq!(Foo::from_repr(0b100), None);
    assert_eq!(Foo::VARIANTS, [Foo::Foo0, Foo::Foo1, Foo::Foo2]);
    assert_eq!(Wide::High.to_repr(), 0xff00);
}

#[test]
fn formats_flags() {
    assert_eq!(format!("{:?}", Foo::Foo1 | Foo::Foo2), "Flags(Foo1 | Foo2)");
    assert_eq!(format!("{:?}", Flags::<Foo>::empty()), "Flags(0x0)");
    let stray = Flags::<Foo>::from_bits_retain(0x80);
    assert_eq!(format!("{:?}", Foo::Foo1 | stray), "Flags(Foo1 | 0x80)");
    assert_eq!(format!("{:?}", Flags::<Foo>::from_bits_retain(0x40)), "Flags(0x40)");

    let flags = Foo::Foo1 | Foo::Foo2;
    assert_eq!(format!("{flags:b}"), "11");
    assert_eq!(format!("{flags:#06b}"), "0b0011");
    assert_eq!(format!("{:x}", !Foo::Foo0), "ff");
    assert_eq!(format!("{:X}", Wide::High.flags()), "FF00");
    assert_eq!(format!("{:o}", Foo::Foo2.flags()), "2");

    let e = InvalidBits(0b11u8);
    assert_eq!(e.to_string(), "bits 0x3 do not match exactly one variant");
}
