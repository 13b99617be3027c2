// SPDX-License-Identifier: MPL-2.0

const SHIFT: u32 = 12;

#[bitenum::bitwise]
#[derive(Clone, Copy)]
#[repr(u32)]
enum Reg {
    Enable = 1 << 0,
    Reset = 1 << SHIFT,
    High = 1 << 31,
}

fn main() {
    let _: u32 = (Reg::Enable | Reg::High).bits();
    assert_eq!((Reg::Enable | Reg::Reset).bits(), 0x1001);
    assert!(Reg::High.flags() == Reg::High);
}
