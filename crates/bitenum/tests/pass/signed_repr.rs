// SPDX-License-Identifier: MPL-2.0

#[bitenum::bitwise]
#[derive(Clone, Copy)]
enum Signed {
    Sign = -128,
    Low = 1,
    High,
}

fn main() {
    let _: i8 = (Signed::Sign | Signed::Low).bits();
    assert_eq!((Signed::Low | Signed::High).bits(), 0b11);
    assert_eq!((!Signed::Sign).bits(), i8::MAX);
}
