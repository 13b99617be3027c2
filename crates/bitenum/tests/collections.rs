// SPDX-License-Identifier: MPL-2.0

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use bitenum::Flags;

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Foo {
    Foo1 = 0b01,
    Foo2 = 0b10,
    Foo4 = 0b100,
}

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Signed {
    Neg = -1,
    Pos = 1,
}

#[test]
fn enums_remain_ordered_keys() {
    let set = BTreeSet::from([Foo::Foo4, Foo::Foo1, Foo::Foo2]);
    assert!(set.contains(&Foo::Foo1));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [Foo::Foo1, Foo::Foo2, Foo::Foo4]);

    let map = BTreeMap::from([(Foo::Foo2, "two"), (Foo::Foo1, "one")]);
    assert_eq!(map.get(&Foo::Foo1), Some(&"one"));
    assert_eq!(map.keys().next(), Some(&Foo::Foo1));
    assert!(Foo::Foo1 < Foo::Foo2);
}

#[test]
fn enums_remain_hashable_keys() {
    let set = HashSet::from([Foo::Foo1, Foo::Foo2]);
    assert!(set.contains(&Foo::Foo1));
    assert!(!set.contains(&Foo::Foo4));

    let mut map = HashMap::new();
    map.insert(Foo::Foo2, 2);
    *map.entry(Foo::Foo2).or_insert(0) += 1;
    assert_eq!(map[&Foo::Foo2], 3);
}

#[test]
fn flags_order_by_representation() {
    let set: BTreeSet<Flags<Foo>> =
        [Foo::Foo4.flags(), Foo::Foo1 | Foo::Foo2, Foo::Foo1.flags()].into_iter().collect();
    let bits: Vec<u8> = set.iter().map(|flags| flags.bits()).collect();
    assert_eq!(bits, [0b001, 0b011, 0b100]);

    // Signed representations order as signed integers.
    assert!(Signed::Neg.flags() < Signed::Pos.flags());
    assert_eq!(Signed::Neg.flags().cmp(&Signed::Pos.flags()), Signed::Neg.cmp(&Signed::Pos));
}

#[test]
fn flags_are_hashable_keys() {
    let mut map = HashMap::new();
    map.insert(Foo::Foo1 | Foo::Foo2, "both");
    map.insert(Foo::Foo4.flags(), "four");

    assert_eq!(map.get(&(Foo::Foo2 | Foo::Foo1)), Some(&"both"));
    assert_eq!(map.get(&Foo::Foo4.flags()), Some(&"four"));
    assert_eq!(map.get(&Foo::Foo1.flags()), None);

    let set: HashSet<Flags<Foo>> = [Foo::Foo1 | Foo::Foo2, Foo::Foo2 | Foo::Foo1].into();
    assert_eq!(set.len(), 1);
}
