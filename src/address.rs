// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IPv4 address codec and byte-order helpers.
//!
//! Addresses are carried as 32-bit integers in network byte order: the value's
//! in-memory bytes are the four octets in the order they are written. On a
//! little-endian host `192.168.1.50` is therefore `0x3201_A8C0`.
//!
//! The byte-order helpers make the swap decision explicit instead of relying on
//! a platform conversion, so both branches can be exercised on any host.
//!
//! # Example
//!
//! ```
//! use zonekeeper::address::{format_ipv4, parse_ipv4, flip_octets};
//!
//! let addr = parse_ipv4("192.168.1.50").unwrap();
//! assert_eq!(format_ipv4(addr), "192.168.1.50");
//! assert_eq!(format_ipv4(flip_octets(addr)), "50.1.168.192");
//! ```

use std::net::Ipv4Addr;

use crate::constants::{IPV4_REVERSE_SUFFIX, MAX_DOTTED_QUAD_LEN, MIN_DOTTED_QUAD_LEN};
use crate::dns_errors::{DnsError, Result};

const HOST_IS_LITTLE_ENDIAN: bool = cfg!(target_endian = "little");

/// Parse a dotted-quad string into a network-order `u32`.
///
/// Leading zeros within an octet are accepted; the result formats back to the
/// canonical form without them.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if the string is shorter than 7 or
/// longer than 15 characters, contains anything other than digits and dots,
/// does not have exactly four non-empty octets, or has an octet above 255.
pub fn parse_ipv4(text: &str) -> Result<u32> {
    let invalid = |reason: &str| DnsError::invalid_argument("address", format!("'{text}' {reason}"));

    if text.len() < MIN_DOTTED_QUAD_LEN || text.len() > MAX_DOTTED_QUAD_LEN {
        return Err(invalid("is not 7 to 15 characters long"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid("contains characters other than digits and '.'"));
    }

    let mut octets = [0u8; 4];
    let mut count = 0usize;
    for group in text.split('.') {
        if count == octets.len() {
            return Err(invalid("has more than four octets"));
        }
        if group.is_empty() {
            return Err(invalid("has an empty octet"));
        }
        let value: u32 = group
            .parse()
            .map_err(|_| invalid("has an unparsable octet"))?;
        octets[count] = u8::try_from(value).map_err(|_| invalid("has an octet above 255"))?;
        count += 1;
    }
    if count != octets.len() {
        return Err(invalid("has fewer than four octets"));
    }

    Ok(u32::from_ne_bytes(octets))
}

/// Render a network-order `u32` as a dotted quad.
#[must_use]
pub fn format_ipv4(address: u32) -> String {
    let [a, b, c, d] = address.to_ne_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Parse a dotted-quad string into an [`Ipv4Addr`].
///
/// # Errors
///
/// See [`parse_ipv4`].
pub fn parse_ipv4_addr(text: &str) -> Result<Ipv4Addr> {
    parse_ipv4(text).map(ipv4_from_network)
}

/// Convert a network-order `u32` into an [`Ipv4Addr`].
#[must_use]
pub fn ipv4_from_network(address: u32) -> Ipv4Addr {
    Ipv4Addr::from(address.to_ne_bytes())
}

/// Convert an [`Ipv4Addr`] into a network-order `u32`.
#[must_use]
pub fn ipv4_to_network(address: Ipv4Addr) -> u32 {
    u32::from_ne_bytes(address.octets())
}

/// Reverse the octet order of an address.
///
/// Converts between natural order and the order used in reverse-lookup names.
#[must_use]
pub fn flip_octets(address: u32) -> u32 {
    address.swap_bytes()
}

/// Recover the natural-order address from a PTR owner name.
///
/// The first four labels of `name` are the reversed octets, as in
/// `50.1.168.192.in-addr.arpa`. Anything after the fourth label is ignored.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if the name has fewer than four
/// labels or the labels do not form a valid dotted quad.
pub fn ptr_name_to_address(name: &str) -> Result<u32> {
    let labels: Vec<&str> = name.splitn(5, '.').take(4).collect();
    if labels.len() < 4 {
        return Err(DnsError::invalid_argument(
            "name",
            format!("'{name}' has fewer than four labels for a reverse address"),
        ));
    }
    parse_ipv4(&labels.join(".")).map(flip_octets)
}

/// Build the IPv4 reverse-lookup name for an address.
#[must_use]
pub fn address_to_ptr_name(address: u32) -> String {
    format!("{}.{IPV4_REVERSE_SUFFIX}", format_ipv4(flip_octets(address)))
}

/// Byte-order a `u16` between network and host order for the given host endianness.
#[must_use]
pub fn reorder_u16(value: u16, little_endian: bool) -> u16 {
    if little_endian {
        value.swap_bytes()
    } else {
        value
    }
}

/// Byte-order a `u32` between network and host order for the given host endianness.
#[must_use]
pub fn reorder_u32(value: u32, little_endian: bool) -> u32 {
    if little_endian {
        value.swap_bytes()
    } else {
        value
    }
}

/// Byte-order a `u64` between network and host order for the given host endianness.
#[must_use]
pub fn reorder_u64(value: u64, little_endian: bool) -> u64 {
    if little_endian {
        value.swap_bytes()
    } else {
        value
    }
}

/// Convert a network-order `u16` to host order.
#[must_use]
pub fn network_to_host_u16(value: u16) -> u16 {
    reorder_u16(value, HOST_IS_LITTLE_ENDIAN)
}

/// Convert a network-order `u32` to host order.
#[must_use]
pub fn network_to_host_u32(value: u32) -> u32 {
    reorder_u32(value, HOST_IS_LITTLE_ENDIAN)
}

/// Convert a network-order `u64` to host order.
#[must_use]
pub fn network_to_host_u64(value: u64) -> u64 {
    reorder_u64(value, HOST_IS_LITTLE_ENDIAN)
}

/// Convert a host-order `u16` to network order.
#[must_use]
pub fn host_to_network_u16(value: u16) -> u16 {
    reorder_u16(value, HOST_IS_LITTLE_ENDIAN)
}

/// Convert a host-order `u32` to network order.
#[must_use]
pub fn host_to_network_u32(value: u32) -> u32 {
    reorder_u32(value, HOST_IS_LITTLE_ENDIAN)
}

/// Convert a host-order `u64` to network order.
#[must_use]
pub fn host_to_network_u64(value: u64) -> u64 {
    reorder_u64(value, HOST_IS_LITTLE_ENDIAN)
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod address_tests;
