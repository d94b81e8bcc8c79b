// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Host address records: A, AAAA, WKS and ATMA.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, DnsError, Result};

/// A record data: one IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AData {
    address: Tracked<Ipv4Addr>,
}

impl AData {
    /// Create A record data.
    #[must_use]
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address: Tracked::new(address),
        }
    }

    /// The IPv4 address.
    #[must_use]
    pub fn address(&self) -> Ipv4Addr {
        *self.address.get()
    }

    /// Change the IPv4 address.
    pub fn set_address(&mut self, address: Ipv4Addr) {
        self.address.set(address);
    }
}

impl RecordKind for AData {
    fn has_changes(&self) -> bool {
        self.address.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.address.mark_saved();
    }

    fn data_text(&self) -> String {
        self.address().to_string()
    }
}

/// AAAA record data: one IPv6 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AaaaData {
    address: Tracked<Ipv6Addr>,
}

impl AaaaData {
    /// Create AAAA record data.
    #[must_use]
    pub fn new(address: Ipv6Addr) -> Self {
        Self {
            address: Tracked::new(address),
        }
    }

    /// The IPv6 address.
    #[must_use]
    pub fn address(&self) -> Ipv6Addr {
        *self.address.get()
    }

    /// Change the IPv6 address.
    pub fn set_address(&mut self, address: Ipv6Addr) {
        self.address.set(address);
    }
}

impl RecordKind for AaaaData {
    fn has_changes(&self) -> bool {
        self.address.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.address.mark_saved();
    }

    fn data_text(&self) -> String {
        self.address().to_string()
    }
}

/// IP protocol a WKS record describes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WksProtocol {
    /// Transmission Control Protocol
    TCP,
    /// User Datagram Protocol
    UDP,
}

impl fmt::Display for WksProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TCP => "TCP",
            Self::UDP => "UDP",
        })
    }
}

impl FromStr for WksProtocol {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("tcp") {
            Ok(Self::TCP)
        } else if s.eq_ignore_ascii_case("udp") {
            Ok(Self::UDP)
        } else {
            Err(DnsError::invalid_argument(
                "protocol",
                format!("'{s}' is not TCP or UDP"),
            ))
        }
    }
}

/// WKS record data: services offered on a host over one protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WksData {
    address: Tracked<Ipv4Addr>,
    protocol: Tracked<WksProtocol>,
    services: Tracked<Vec<String>>,
}

impl WksData {
    /// Create WKS record data.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if any service name is blank.
    pub fn new(address: Ipv4Addr, protocol: WksProtocol, services: Vec<String>) -> Result<Self> {
        validate_services(&services)?;
        Ok(Self {
            address: Tracked::new(address),
            protocol: Tracked::new(protocol),
            services: Tracked::new(services),
        })
    }

    /// The host address.
    #[must_use]
    pub fn address(&self) -> Ipv4Addr {
        *self.address.get()
    }

    /// Change the host address.
    pub fn set_address(&mut self, address: Ipv4Addr) {
        self.address.set(address);
    }

    /// The IP protocol.
    #[must_use]
    pub fn protocol(&self) -> WksProtocol {
        *self.protocol.get()
    }

    /// Change the IP protocol.
    pub fn set_protocol(&mut self, protocol: WksProtocol) {
        self.protocol.set(protocol);
    }

    /// Service names, in the order given.
    #[must_use]
    pub fn services(&self) -> &[String] {
        self.services.get()
    }

    /// Replace the service names.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if any service name is blank.
    pub fn set_services(&mut self, services: Vec<String>) -> Result<()> {
        validate_services(&services)?;
        self.services.set(services);
        Ok(())
    }
}

fn validate_services(services: &[String]) -> Result<()> {
    services
        .iter()
        .try_for_each(|service| require_non_blank("services", service))
}

impl RecordKind for WksData {
    fn has_changes(&self) -> bool {
        self.address.is_dirty() || self.protocol.is_dirty() || self.services.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.address.mark_saved();
        self.protocol.mark_saved();
        self.services.mark_saved();
    }

    fn data_text(&self) -> String {
        let mut text = format!("{} {}", self.address(), self.protocol());
        for service in self.services() {
            text.push(' ');
            text.push_str(service);
        }
        text
    }
}

/// Address format of an ATMA record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmaFormat {
    /// ATM End System Address, hex digits
    Aesa,
    /// E.164 telephone number
    E164,
}

impl AtmaFormat {
    /// The numeric format code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Aesa => 0,
            Self::E164 => 1,
        }
    }

    /// Look up a format by numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Aesa),
            1 => Some(Self::E164),
            _ => None,
        }
    }
}

impl fmt::Display for AtmaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aesa => "AESA",
            Self::E164 => "E164",
        })
    }
}

/// ATMA record data: an ATM address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmaData {
    format: Tracked<AtmaFormat>,
    address: Tracked<String>,
}

impl AtmaData {
    /// Create ATMA record data.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `address` is blank.
    pub fn new(format: AtmaFormat, address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        require_non_blank("atm_address", &address)?;
        Ok(Self {
            format: Tracked::new(format),
            address: Tracked::new(address),
        })
    }

    /// The address format.
    #[must_use]
    pub fn format(&self) -> AtmaFormat {
        *self.format.get()
    }

    /// Change the address format.
    pub fn set_format(&mut self, format: AtmaFormat) {
        self.format.set(format);
    }

    /// The ATM address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.get()
    }

    /// Change the ATM address.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `address` is blank.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<()> {
        let address = address.into();
        require_non_blank("atm_address", &address)?;
        self.address.set(address);
        Ok(())
    }
}

impl RecordKind for AtmaData {
    fn has_changes(&self) -> bool {
        self.format.is_dirty() || self.address.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.format.mark_saved();
        self.address.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("[{}] {}", self.format(), self.address())
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod host_tests;
