// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the IPv4 address codec.

#[cfg(test)]
mod tests {
    use super::super::*;
    use std::net::Ipv4Addr;

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_ipv4_network_order_bytes() {
        let addr = parse_ipv4("192.168.1.50").unwrap();
        assert_eq!(addr.to_ne_bytes(), [192, 168, 1, 50]);
    }

    #[test]
    fn test_parse_ipv4_bounds() {
        assert_eq!(parse_ipv4("0.0.0.0").unwrap(), 0);
        assert_eq!(parse_ipv4("255.255.255.255").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_ipv4_rejects_malformed() {
        for text in [
            "",
            "1.2.3",
            "1.2.3.4.5",
            "1.2.3.256",
            "1..2.3",
            "1.2.3.",
            ".1.2.3",
            "a.b.c.d",
            "1.2.3.-4",
            " 1.2.3.4",
            "1234.1.1.1",
            "1.2.3.4.",
            "000.000.000.0000",
        ] {
            let result = parse_ipv4(text);
            assert!(
                result.as_ref().is_err_and(crate::dns_errors::DnsError::is_invalid_argument),
                "'{text}' should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_ipv4_accepts_leading_zeros() {
        let addr = parse_ipv4("010.001.000.009").unwrap();
        assert_eq!(format_ipv4(addr), "10.1.0.9");
    }

    // ========================================================================
    // Round trips
    // ========================================================================

    #[test]
    fn test_format_parse_round_trip_for_values() {
        for value in [
            0u32,
            1,
            0x0100_0000,
            0x3201_A8C0,
            0xDEAD_BEEF,
            0x7F00_0001,
            u32::MAX - 1,
            u32::MAX,
        ] {
            assert_eq!(parse_ipv4(&format_ipv4(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_parse_format_round_trip_is_canonical() {
        assert_eq!(format_ipv4(parse_ipv4("192.168.001.050").unwrap()), "192.168.1.50");
        assert_eq!(format_ipv4(parse_ipv4("8.8.8.8").unwrap()), "8.8.8.8");
    }

    #[test]
    fn test_ipv4_addr_conversions() {
        let addr = parse_ipv4_addr("10.20.30.40").unwrap();
        assert_eq!(addr, Ipv4Addr::new(10, 20, 30, 40));
        assert_eq!(ipv4_to_network(addr), parse_ipv4("10.20.30.40").unwrap());
        assert_eq!(ipv4_from_network(ipv4_to_network(addr)), addr);
    }

    // ========================================================================
    // Octet flipping and PTR names
    // ========================================================================

    #[test]
    fn test_flip_octets() {
        let addr = parse_ipv4("192.168.1.50").unwrap();
        assert_eq!(format_ipv4(flip_octets(addr)), "50.1.168.192");
    }

    #[test]
    fn test_flip_is_involution() {
        for value in [0u32, 0x0102_0304, 0xFF00_FF00, u32::MAX, 0x3201_A8C0] {
            assert_eq!(flip_octets(flip_octets(value)), value);
        }
    }

    #[test]
    fn test_ptr_name_to_address() {
        let addr = ptr_name_to_address("50.1.168.192.in-addr.arpa").unwrap();
        assert_eq!(format_ipv4(addr), "192.168.1.50");
    }

    #[test]
    fn test_ptr_name_to_address_requires_four_labels() {
        assert!(ptr_name_to_address("1.168.192.in-addr").is_err());
        assert!(ptr_name_to_address("168.192").is_err());
        assert!(ptr_name_to_address("host.example.com.in-addr.arpa").is_err());
    }

    #[test]
    fn test_address_to_ptr_name() {
        let addr = parse_ipv4("10.0.0.7").unwrap();
        assert_eq!(address_to_ptr_name(addr), "7.0.0.10.in-addr.arpa");
        assert_eq!(ptr_name_to_address(&address_to_ptr_name(addr)).unwrap(), addr);
    }

    // ========================================================================
    // Byte order
    // ========================================================================

    #[test]
    fn test_reorder_little_endian_swaps() {
        assert_eq!(reorder_u16(0x1234, true), 0x3412);
        assert_eq!(reorder_u32(0x1234_5678, true), 0x7856_3412);
        assert_eq!(reorder_u64(0x0102_0304_0506_0708, true), 0x0807_0605_0403_0201);
    }

    #[test]
    fn test_reorder_big_endian_is_identity() {
        assert_eq!(reorder_u16(0x1234, false), 0x1234);
        assert_eq!(reorder_u32(0x1234_5678, false), 0x1234_5678);
        assert_eq!(reorder_u64(0x0102_0304_0506_0708, false), 0x0102_0304_0506_0708);
    }

    #[test]
    fn test_host_network_helpers_match_platform() {
        assert_eq!(host_to_network_u16(0x1234), 0x1234u16.to_be());
        assert_eq!(host_to_network_u32(0x1234_5678), 0x1234_5678u32.to_be());
        assert_eq!(host_to_network_u64(42), 42u64.to_be());
        assert_eq!(network_to_host_u16(0x1234u16.to_be()), 0x1234);
        assert_eq!(network_to_host_u32(0x1234_5678u32.to_be()), 0x1234_5678);
        assert_eq!(network_to_host_u64(42u64.to_be()), 42);
    }

    #[test]
    fn test_network_order_address_to_host_order() {
        let addr = parse_ipv4("192.168.1.50").unwrap();
        assert_eq!(network_to_host_u32(addr), 0xC0A8_0132);
    }
}
