use crate::error::{Result, SubnetError};
use std::net::Ipv4Addr;

/// A non-empty, immutable list of addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSet {
    inner: Vec<Ipv4Addr>,
}

impl AddressSet {
    pub fn new<I: IntoIterator<Item = Ipv4Addr>>(addresses: I) -> Result<Self> {
        let addresses: Vec<Ipv4Addr> = addresses.into_iter().collect();
        if addresses.is_empty() {
            return Err(SubnetError::EmptyInput);
        }
        Ok(AddressSet { inner: addresses })
    }

    pub fn from_u32s<I: IntoIterator<Item = u32>>(iter: I) -> Result<Self> {
        Self::new(iter.into_iter().map(Ipv4Addr::from))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn min(&self) -> Ipv4Addr {
        let mut smallest = self.inner[0];
        for &ip in &self.inner {
            if ip < smallest {
                smallest = ip;
            }
        }
        smallest
    }

    pub fn max(&self) -> Ipv4Addr {
        let mut largest = self.inner[0];
        for &ip in &self.inner {
            if ip > largest {
                largest = ip;
            }
        }
        largest
    }

    /// `(min, max)` in a single pass.
    pub fn bounds(&self) -> (Ipv4Addr, Ipv4Addr) {
        self.inner
            .iter()
            .fold((self.inner[0], self.inner[0]), |(lo, hi), &ip| {
                (lo.min(ip), hi.max(ip))
            })
    }
}
