use crate::ipv4::MAX_LENGTH;
use std::net::Ipv4Addr;

/// Leading bits `a` and `b` share at full 32-bit width; 32 when equal.
pub fn common_prefix_len(a: Ipv4Addr, b: Ipv4Addr) -> u8 {
    common_prefix_len_u32(u32::from(a), u32::from(b))
}

pub fn common_prefix_len_u32(a: u32, b: u32) -> u8 {
    MAX_LENGTH - bit_length(a ^ b)
}

pub fn bit_length(x: u32) -> u8 {
    (u32::BITS - x.leading_zeros()) as u8
}
