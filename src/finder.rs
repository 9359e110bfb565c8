use crate::address_set::AddressSet;
use crate::error::Result;
use crate::ipv4::{build_cidr, Ipv4Cidr};
use crate::prefix::common_prefix_len;
use std::net::Ipv4Addr;

/// Smallest CIDR block holding every address in `addresses`.
///
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_finder::find_minimal_subnet;
///
/// let cidr = find_minimal_subnet(&[
///     Ipv4Addr::new(128, 42, 5, 17),
///     Ipv4Addr::new(128, 42, 5, 67),
/// ])
/// .unwrap();
/// assert_eq!(cidr.to_string(), "128.42.5.0/25");
/// ```
pub fn find_minimal_subnet(addresses: &[Ipv4Addr]) -> Result<Ipv4Cidr> {
    MinimalSubnetFinder::new(addresses.to_vec())?.find()
}

pub struct MinimalSubnetFinder {
    set: AddressSet,
}

impl MinimalSubnetFinder {
    pub fn new(addresses: Vec<Ipv4Addr>) -> Result<Self> {
        Ok(MinimalSubnetFinder {
            set: AddressSet::new(addresses)?,
        })
    }

    pub fn from_set(set: AddressSet) -> Self {
        MinimalSubnetFinder { set }
    }

    pub fn addresses(&self) -> &AddressSet {
        &self.set
    }

    pub fn find(&self) -> Result<Ipv4Cidr> {
        if self.set.len() == 1 {
            let cidr = Ipv4Cidr::host(self.set.min());
            log::debug!("single address, covering subnet {}", cidr);
            return Ok(cidr);
        }
        // The extremes bound every other address, an arbitrary pair does not.
        let (lo, hi) = self.set.bounds();
        let prefix_len = common_prefix_len(lo, hi);
        log::debug!(
            "{} addresses bounded by {} and {}, sharing {} leading bits",
            self.set.len(),
            lo,
            hi,
            prefix_len
        );
        let cidr = build_cidr(lo, prefix_len)?;
        log::debug!("mask {:032b}, covering subnet {}", cidr.netmask(), cidr);
        Ok(cidr)
    }
}
