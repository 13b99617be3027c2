// SPDX-License-Identifier: MPL-2.0

#[bitenum::bitwise]
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
enum Feature {
    Base = 0b01,
    #[cfg(any())]
    Missing = 0b10,
    Extra = 0b100,
}

fn main() {
    use bitenum::BitwiseEnum as _;

    assert_eq!(Feature::VARIANTS, [Feature::Base, Feature::Extra]);
    assert_eq!((Feature::Base | Feature::Extra).iter().count(), 2);
}
