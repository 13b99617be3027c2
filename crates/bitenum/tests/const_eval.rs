// SPDX-License-Identifier: MPL-2.0

use bitenum::Flags;

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Foo {
    Foo0 = 0b00,
    Foo1 = 0b01,
    Foo2 = 0b10,
}

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug)]
#[repr(i64)]
enum Big {
    Min = i64::MIN,
    One = 1,
}

const FOO1: Flags<Foo> = Foo::Foo1.flags();
const FOO2: Flags<Foo> = Foo::Foo2.flags();
const FOO3: Flags<Foo> = FOO1.union(FOO2);

const _: () = assert!(FOO3.bits() == 0b11);
const _: () = assert!(FOO3.intersects(FOO1));
const _: () = assert!(FOO3.intersection(FOO2.complement()).bits() == Foo::Foo1.bits());
const _: () = assert!(FOO3.symmetric_difference(FOO1).bits() == FOO2.bits());
const _: () = assert!(FOO3.difference(FOO2).bits() == FOO1.bits());
const _: () = assert!(FOO3.contains(FOO2));
const _: () = assert!(!FOO1.contains(FOO3));
const _: () = assert!(!FOO1.is_empty());
const _: () = assert!(Foo::Foo0.flags().is_empty());
const _: () = assert!(Flags::<Foo>::empty().is_empty());
const _: () = assert!(FOO1.complement().complement().bits() == FOO1.bits());

const BIG: Flags<Big> = Big::Min.flags().union(Big::One.flags());
const _: () = assert!(BIG.bits() == i64::MIN | 1);

#[test]
fn const_results_match_operators() {
    assert_eq!(FOO3, Foo::Foo1 | Foo::Foo2);
    assert_eq!(FOO3.intersection(FOO2.complement()), (Foo::Foo1 | Foo::Foo2) & !Foo::Foo2);
    assert_eq!(FOO1.symmetric_difference(FOO3), Foo::Foo1 ^ FOO3);
    assert_eq!(FOO1.complement(), !Foo::Foo1);
    assert_eq!(BIG, Big::Min | Big::One);
}

#[test]
fn const_items_fill_statics() {
    static TABLE: [Flags<Foo>; 3] = [FOO1, FOO2, FOO3];

    assert_eq!(TABLE.iter().filter(|it| it.contains(FOO2)).count(), 2);
}
