pub mod address_set;
pub mod error;
pub mod finder;
pub mod ipv4;
pub mod prefix;

pub use address_set::AddressSet;
pub use error::{Result, SubnetError};
pub use finder::{find_minimal_subnet, MinimalSubnetFinder};
pub use ipv4::{build_cidr, mask_bits, Ipv4Cidr, MAX_LENGTH};
pub use prefix::common_prefix_len;
