// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record type and record class enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dns_errors::DnsError;

/// Every record type supported by the record model.
///
/// Backends map these to their own identifiers; [`RecordType::ALL`] is the
/// stable, complete list to map against.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 host address (RFC 1035)
    A,
    /// IPv6 host address (RFC 3596)
    AAAA,
    /// AFS database location (RFC 1183)
    AFSDB,
    /// ATM address
    ATMA,
    /// Canonical name (RFC 1035)
    CNAME,
    /// Host information (RFC 1035)
    HINFO,
    /// ISDN address (RFC 1183)
    ISDN,
    /// Public key (RFC 2535)
    KEY,
    /// Mailbox domain name (RFC 1035)
    MB,
    /// Mail destination, obsolete (RFC 1035)
    MD,
    /// Mail forwarder, obsolete (RFC 1035)
    MF,
    /// Mail group member (RFC 1035)
    MG,
    /// Mailbox information (RFC 1035)
    MINFO,
    /// Mail rename domain name (RFC 1035)
    MR,
    /// Mail exchanger (RFC 1035)
    MX,
    /// Authoritative name server (RFC 1035)
    NS,
    /// Next domain, obsolete (RFC 2535)
    NXT,
    /// Domain name pointer (RFC 1035)
    PTR,
    /// Responsible person (RFC 1183)
    RP,
    /// Route through (RFC 1183)
    RT,
    /// Signature (RFC 2535)
    SIG,
    /// Start of authority (RFC 1035)
    SOA,
    /// Service locator (RFC 2782)
    SRV,
    /// Text strings (RFC 1035)
    TXT,
    /// WINS forward lookup
    WINS,
    /// WINS reverse lookup
    WINSR,
    /// Well-known services (RFC 1035)
    WKS,
    /// X.25 PSDN address (RFC 1183)
    X25,
}

impl RecordType {
    /// All record types, in mnemonic order.
    pub const ALL: [RecordType; 28] = [
        Self::A,
        Self::AAAA,
        Self::AFSDB,
        Self::ATMA,
        Self::CNAME,
        Self::HINFO,
        Self::ISDN,
        Self::KEY,
        Self::MB,
        Self::MD,
        Self::MF,
        Self::MG,
        Self::MINFO,
        Self::MR,
        Self::MX,
        Self::NS,
        Self::NXT,
        Self::PTR,
        Self::RP,
        Self::RT,
        Self::SIG,
        Self::SOA,
        Self::SRV,
        Self::TXT,
        Self::WINS,
        Self::WINSR,
        Self::WKS,
        Self::X25,
    ];

    /// The mnemonic used in zone files and diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::AFSDB => "AFSDB",
            Self::ATMA => "ATMA",
            Self::CNAME => "CNAME",
            Self::HINFO => "HINFO",
            Self::ISDN => "ISDN",
            Self::KEY => "KEY",
            Self::MB => "MB",
            Self::MD => "MD",
            Self::MF => "MF",
            Self::MG => "MG",
            Self::MINFO => "MINFO",
            Self::MR => "MR",
            Self::MX => "MX",
            Self::NS => "NS",
            Self::NXT => "NXT",
            Self::PTR => "PTR",
            Self::RP => "RP",
            Self::RT => "RT",
            Self::SIG => "SIG",
            Self::SOA => "SOA",
            Self::SRV => "SRV",
            Self::TXT => "TXT",
            Self::WINS => "WINS",
            Self::WINSR => "WINSR",
            Self::WKS => "WKS",
            Self::X25 => "X25",
        }
    }

    /// The numeric TYPE code. WINS and WINSR use the private-use codes
    /// `0xFF01` and `0xFF02`.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::A => 1,
            Self::NS => 2,
            Self::MD => 3,
            Self::MF => 4,
            Self::CNAME => 5,
            Self::SOA => 6,
            Self::MB => 7,
            Self::MG => 8,
            Self::MR => 9,
            Self::WKS => 11,
            Self::PTR => 12,
            Self::HINFO => 13,
            Self::MINFO => 14,
            Self::MX => 15,
            Self::TXT => 16,
            Self::RP => 17,
            Self::AFSDB => 18,
            Self::X25 => 19,
            Self::ISDN => 20,
            Self::RT => 21,
            Self::SIG => 24,
            Self::KEY => 25,
            Self::AAAA => 28,
            Self::NXT => 30,
            Self::SRV => 33,
            Self::ATMA => 34,
            Self::WINS => 0xFF01,
            Self::WINSR => 0xFF02,
        }
    }

    /// Look up a record type by numeric code.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DnsError::invalid_argument("record_type", format!("unknown record type '{s}'")))
    }
}

/// Record class (RFC 1035 section 3.2.4).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordClass {
    /// The Internet
    #[default]
    IN,
    /// CSNET, obsolete
    CS,
    /// Chaos
    CH,
    /// Hesiod
    HS,
}

impl RecordClass {
    /// The numeric CLASS code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::IN => 1,
            Self::CS => 2,
            Self::CH => 3,
            Self::HS => 4,
        }
    }

    /// Look up a record class by numeric code.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::IN),
            2 => Some(Self::CS),
            3 => Some(Self::CH),
            4 => Some(Self::HS),
            _ => None,
        }
    }

    /// The mnemonic used in zone files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IN => "IN",
            Self::CS => "CS",
            Self::CH => "CH",
            Self::HS => "HS",
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
