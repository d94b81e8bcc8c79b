// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for zonekeeper.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Record Defaults
// ============================================================================

/// Default TTL applied to the SOA and NS records seeded into new zones (1 hour)
pub const DEFAULT_ZONE_TTL_SECS: u64 = 3600;

// ============================================================================
// SOA Defaults
// ============================================================================

/// Default SOA refresh interval (15 minutes)
pub const DEFAULT_SOA_REFRESH_SECS: u64 = 900;

/// Default SOA retry interval (10 minutes)
pub const DEFAULT_SOA_RETRY_SECS: u64 = 600;

/// Default SOA expire time (1 day)
pub const DEFAULT_SOA_EXPIRE_SECS: u64 = 86400;

/// Default SOA minimum (negative caching) TTL (1 hour)
pub const DEFAULT_SOA_MINIMUM_TTL_SECS: u64 = 3600;

/// Mailbox label prepended to the zone name for the seeded SOA responsible party
pub const DEFAULT_SOA_RESPONSIBLE_PERSON: &str = "hostmaster";

/// Two-digit revision appended to the `YYYYMMDD` date of a seeded SOA serial
pub const SOA_SERIAL_INITIAL_REVISION: u32 = 1;

// ============================================================================
// Reverse Lookup Constants
// ============================================================================

/// Suffix of IPv4 reverse-lookup names (RFC 1035 section 3.5)
pub const IPV4_REVERSE_SUFFIX: &str = "in-addr.arpa";

/// Suffix of IPv6 reverse-lookup names (RFC 3596)
pub const IPV6_REVERSE_SUFFIX: &str = "ip6.arpa";

// ============================================================================
// Address Codec Constants
// ============================================================================

/// Shortest dotted-quad string ("0.0.0.0")
pub const MIN_DOTTED_QUAD_LEN: usize = 7;

/// Longest dotted-quad string ("255.255.255.255")
pub const MAX_DOTTED_QUAD_LEN: usize = 15;

// ============================================================================
// Management Protocol Constants
// ============================================================================

/// Management class enumerating zones hosted by a remote server
pub const CLASS_ZONE: &str = "MicrosoftDNS_Zone";

/// Base management class every record class derives from
pub const CLASS_RESOURCE_RECORD: &str = "MicrosoftDNS_ResourceRecord";

/// Prefix of the standard per-type record class names
pub const RECORD_CLASS_PREFIX: &str = "MicrosoftDNS_";

/// Suffix of the standard per-type record class names
pub const RECORD_CLASS_SUFFIX: &str = "Type";

/// Property carrying a record's owner name
pub const PROP_OWNER_NAME: &str = "OwnerName";

/// Property carrying a record's TTL in seconds
pub const PROP_TTL: &str = "TTL";

/// Property carrying a record's numeric class
pub const PROP_RECORD_CLASS: &str = "RecordClass";

/// Property carrying a record's textual data presentation
pub const PROP_RECORD_DATA: &str = "RecordData";

/// Property carrying the zone that contains a record
pub const PROP_CONTAINER_NAME: &str = "ContainerName";

/// Property carrying the domain a record belongs to
pub const PROP_DOMAIN_NAME: &str = "DomainName";

/// Property carrying the DNS server name hosting a record or zone
pub const PROP_SERVER_NAME: &str = "DnsServerName";

/// Property carrying a zone's domain name
pub const PROP_ZONE_NAME: &str = "Name";

/// Property carrying a zone's numeric type
pub const PROP_ZONE_TYPE: &str = "ZoneType";

/// Property carrying a zone's reverse-lookup flag
pub const PROP_REVERSE: &str = "Reverse";

// ============================================================================
// Presentation Format Constants
// ============================================================================

/// Timestamp layout of SIG expiration and inception fields (RFC 2535)
pub const SIG_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
