use crate::error::{Result, SubnetError};
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;

pub const MAX_LENGTH: u8 = 32;

/// Mask with the top `prefix_len` bits set.
pub fn mask_bits(prefix_len: u8) -> Result<u32> {
    match prefix_len {
        0 => Ok(0),
        p if p <= MAX_LENGTH => Ok(u32::MAX << (MAX_LENGTH - p)),
        p => Err(SubnetError::InvalidPrefixLength(p)),
    }
}

pub fn build_cidr(base: Ipv4Addr, prefix_len: u8) -> Result<Ipv4Cidr> {
    let cidr = Ipv4Cidr::new(u32::from(base), prefix_len)?;
    log::trace!("build_cidr({}, {}) = {}", base, prefix_len, cidr);
    Ok(cidr)
}

/// An IPv4 network in canonical form: every bit past the prefix is zero.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub struct Ipv4Cidr {
    net: u32,
    size: u8,
}

impl Ipv4Cidr {
    pub fn new(net: u32, mask: u8) -> Result<Self> {
        let net = net & mask_bits(mask)?;
        let size = MAX_LENGTH - mask;
        Ok(Ipv4Cidr { net, size })
    }

    pub fn host(ip: Ipv4Addr) -> Self {
        Ipv4Cidr {
            net: u32::from(ip),
            size: 0,
        }
    }

    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.net)
    }

    pub fn prefix_len(&self) -> u8 {
        MAX_LENGTH - self.size
    }

    pub fn netmask(&self) -> u32 {
        !self.host_bits()
    }

    pub fn first_ip(&self) -> Ipv4Addr {
        self.network()
    }

    pub fn last_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.to_range().1)
    }

    pub fn contains_ip(&self, ip: &Ipv4Addr) -> bool {
        if self.size == MAX_LENGTH {
            return true;
        }
        self.net >> self.size == u32::from(*ip) >> self.size
    }

    pub fn to_range(&self) -> (u32, u32) {
        (self.net, self.net | self.host_bits())
    }

    fn host_bits(&self) -> u32 {
        if self.size == MAX_LENGTH {
            return u32::MAX;
        }
        (1u32 << self.size) - 1
    }
}

impl Display for Ipv4Cidr {
    fn fmt(&self, f: &mut Formatter) -> std::result::Result<(), Error> {
        write!(f, "{}/{}", self.network(), self.prefix_len())
    }
}
