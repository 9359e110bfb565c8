//! End-to-end checks of the covering subnet search through the public API.

use std::net::Ipv4Addr;
use subnet_finder::{
    build_cidr, common_prefix_len, find_minimal_subnet, AddressSet, MinimalSubnetFinder,
    SubnetError,
};

fn ip(s: &str) -> Ipv4Addr {
    s.parse().expect("test address")
}

#[test]
fn test_two_addresses_same_slash_24() {
    let cidr = find_minimal_subnet(&[ip("128.42.5.17"), ip("128.42.5.67")]).unwrap();
    assert_eq!(cidr.network(), ip("128.42.5.0"));
    assert_eq!(cidr.prefix_len(), 25);
    assert_eq!(cidr.last_ip(), ip("128.42.5.127"));
}

#[test]
fn test_three_addresses_diverging_early() {
    let list = [ip("128.42.5.17"), ip("128.42.5.67"), ip("192.160.2.0")];
    let expected = common_prefix_len(ip("128.42.5.17"), ip("192.160.2.0"));
    let cidr = find_minimal_subnet(&list).unwrap();
    assert_eq!(cidr.prefix_len(), expected);
    assert_eq!(cidr.to_string(), "128.0.0.0/1");
    for addr in &list {
        assert!(cidr.contains_ip(addr), "{} not in {}", addr, cidr);
    }
}

#[test]
fn test_single_and_duplicate() {
    assert_eq!(
        find_minimal_subnet(&[ip("10.0.0.1")]).unwrap().to_string(),
        "10.0.0.1/32"
    );
    assert_eq!(
        find_minimal_subnet(&[ip("1.1.1.1"), ip("1.1.1.1")])
            .unwrap()
            .to_string(),
        "1.1.1.1/32"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(find_minimal_subnet(&[]), Err(SubnetError::EmptyInput));
    assert_eq!(
        MinimalSubnetFinder::new(Vec::new()).err(),
        Some(SubnetError::EmptyInput)
    );
}

#[test]
fn test_order_does_not_matter() {
    let forward = [ip("172.16.4.9"), ip("172.16.0.1"), ip("172.16.7.200")];
    let mut backward = forward;
    backward.reverse();
    let a = find_minimal_subnet(&forward).unwrap();
    let b = find_minimal_subnet(&backward).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "172.16.0.0/21");
}

#[test]
fn test_finder_from_set() {
    let set = AddressSet::from_u32s(vec![0x0A00_0010, 0x0A00_001F]).unwrap();
    let finder = MinimalSubnetFinder::from_set(set);
    assert_eq!(finder.addresses().len(), 2);
    assert_eq!(finder.find().unwrap().to_string(), "10.0.0.16/28");
}

#[test]
fn test_builder_rejects_long_prefix() {
    assert_eq!(
        build_cidr(ip("10.0.0.1"), 33),
        Err(SubnetError::InvalidPrefixLength(33))
    );
}
