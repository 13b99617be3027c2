// SPDX-License-Identifier: MPL-2.0

mod reexport {
    pub use bitenum::*;
}

#[reexport::bitwise(crate = crate::reexport)]
#[derive(Clone, Copy)]
enum Foo {
    A = 1,
    B = 2,
}

fn main() {
    let flags: reexport::Flags<Foo> = Foo::A | Foo::B;
    assert_eq!(flags.bits(), 3);
    assert!(reexport::is_bitwise!(Foo));
}
