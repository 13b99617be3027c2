// SPDX-License-Identifier: MPL-2.0

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perm {
    Read = 0b100,
    Write = 0b010,
    Exec = 0b001,
}

fn main() {
    let rw = Perm::Read | Perm::Write;
    let _: u8 = rw.bits();
    assert_eq!(core::mem::size_of::<Perm>(), 1);
    assert!(rw.contains(Perm::Read.flags()));
    assert!((rw & Perm::Exec).is_empty());
}
