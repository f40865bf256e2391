use zerocopy::{FromZeros, Immutable, IntoBytes};

use crate::cpu::params::TRANS_NUM;

/// Wire-exact 2·[`TRANS_NUM`]-byte frame body.
///
/// The same word array is read as gains, per-channel cycles, STM payload or
/// modulation delays depending on the operating mode of the frame.
#[repr(C, align(2))]
#[derive(Clone, Copy, PartialEq, Eq, FromZeros, IntoBytes, Immutable)]
pub struct Body {
    pub data: [u16; TRANS_NUM],
}
