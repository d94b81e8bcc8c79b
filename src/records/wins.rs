// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! WINS lookup records.
//!
//! WINS forwards names missing from the zone to NetBIOS name servers; WINSR
//! does the same for reverse lookups.

use std::net::Ipv4Addr;
use std::time::Duration;

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, DnsError, Result};

/// Mapping flag value that keeps the record local to this server
pub const WINS_MAPPING_FLAG_LOCAL: u32 = 0x0001_0000;

/// WINS record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinsData {
    mapping_flag: Tracked<u32>,
    lookup_timeout: Tracked<Duration>,
    cache_timeout: Tracked<Duration>,
    servers: Tracked<Vec<Ipv4Addr>>,
}

impl WinsData {
    /// Create WINS record data.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `servers` is empty.
    pub fn new(
        mapping_flag: u32,
        lookup_timeout: Duration,
        cache_timeout: Duration,
        servers: Vec<Ipv4Addr>,
    ) -> Result<Self> {
        validate_servers(&servers)?;
        Ok(Self {
            mapping_flag: Tracked::new(mapping_flag),
            lookup_timeout: Tracked::new(lookup_timeout),
            cache_timeout: Tracked::new(cache_timeout),
            servers: Tracked::new(servers),
        })
    }

    /// Mapping flags.
    #[must_use]
    pub fn mapping_flag(&self) -> u32 {
        *self.mapping_flag.get()
    }

    /// Change the mapping flags.
    pub fn set_mapping_flag(&mut self, mapping_flag: u32) {
        self.mapping_flag.set(mapping_flag);
    }

    /// How long to wait for a WINS server to answer.
    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        *self.lookup_timeout.get()
    }

    /// Change the lookup timeout.
    pub fn set_lookup_timeout(&mut self, timeout: Duration) {
        self.lookup_timeout.set(timeout);
    }

    /// How long answers may be cached.
    #[must_use]
    pub fn cache_timeout(&self) -> Duration {
        *self.cache_timeout.get()
    }

    /// Change the cache timeout.
    pub fn set_cache_timeout(&mut self, timeout: Duration) {
        self.cache_timeout.set(timeout);
    }

    /// WINS servers, in lookup order.
    #[must_use]
    pub fn servers(&self) -> &[Ipv4Addr] {
        self.servers.get()
    }

    /// Replace the WINS servers.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `servers` is empty.
    pub fn set_servers(&mut self, servers: Vec<Ipv4Addr>) -> Result<()> {
        validate_servers(&servers)?;
        self.servers.set(servers);
        Ok(())
    }
}

fn validate_servers(servers: &[Ipv4Addr]) -> Result<()> {
    if servers.is_empty() {
        return Err(DnsError::invalid_argument(
            "wins_servers",
            "at least one WINS server is required",
        ));
    }
    Ok(())
}

impl RecordKind for WinsData {
    fn has_changes(&self) -> bool {
        self.mapping_flag.is_dirty()
            || self.lookup_timeout.is_dirty()
            || self.cache_timeout.is_dirty()
            || self.servers.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.mapping_flag.mark_saved();
        self.lookup_timeout.mark_saved();
        self.cache_timeout.mark_saved();
        self.servers.mark_saved();
    }

    fn data_text(&self) -> String {
        let servers: Vec<String> = self.servers().iter().map(ToString::to_string).collect();
        format!(
            "[{}][{}][{}] {}",
            self.mapping_flag(),
            self.lookup_timeout().as_secs(),
            self.cache_timeout().as_secs(),
            servers.join(" ")
        )
    }
}

/// WINSR record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinsrData {
    mapping_flag: Tracked<u32>,
    lookup_timeout: Tracked<Duration>,
    cache_timeout: Tracked<Duration>,
    result_domain: Tracked<String>,
}

impl WinsrData {
    /// Create WINSR record data.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `result_domain` is blank.
    pub fn new(
        mapping_flag: u32,
        lookup_timeout: Duration,
        cache_timeout: Duration,
        result_domain: impl Into<String>,
    ) -> Result<Self> {
        let result_domain = result_domain.into();
        require_non_blank("result_domain", &result_domain)?;
        Ok(Self {
            mapping_flag: Tracked::new(mapping_flag),
            lookup_timeout: Tracked::new(lookup_timeout),
            cache_timeout: Tracked::new(cache_timeout),
            result_domain: Tracked::new(result_domain),
        })
    }

    /// Mapping flags.
    #[must_use]
    pub fn mapping_flag(&self) -> u32 {
        *self.mapping_flag.get()
    }

    /// Change the mapping flags.
    pub fn set_mapping_flag(&mut self, mapping_flag: u32) {
        self.mapping_flag.set(mapping_flag);
    }

    /// How long to wait for a WINS server to answer.
    #[must_use]
    pub fn lookup_timeout(&self) -> Duration {
        *self.lookup_timeout.get()
    }

    /// Change the lookup timeout.
    pub fn set_lookup_timeout(&mut self, timeout: Duration) {
        self.lookup_timeout.set(timeout);
    }

    /// How long answers may be cached.
    #[must_use]
    pub fn cache_timeout(&self) -> Duration {
        *self.cache_timeout.get()
    }

    /// Change the cache timeout.
    pub fn set_cache_timeout(&mut self, timeout: Duration) {
        self.cache_timeout.set(timeout);
    }

    /// Domain appended to NetBIOS names returned by reverse lookups.
    #[must_use]
    pub fn result_domain(&self) -> &str {
        self.result_domain.get()
    }

    /// Change the result domain.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `result_domain` is blank.
    pub fn set_result_domain(&mut self, result_domain: impl Into<String>) -> Result<()> {
        let result_domain = result_domain.into();
        require_non_blank("result_domain", &result_domain)?;
        self.result_domain.set(result_domain);
        Ok(())
    }
}

impl RecordKind for WinsrData {
    fn has_changes(&self) -> bool {
        self.mapping_flag.is_dirty()
            || self.lookup_timeout.is_dirty()
            || self.cache_timeout.is_dirty()
            || self.result_domain.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.mapping_flag.mark_saved();
        self.lookup_timeout.mark_saved();
        self.cache_timeout.mark_saved();
        self.result_domain.mark_saved();
    }

    fn data_text(&self) -> String {
        format!(
            "[{}][{}][{}] {}",
            self.mapping_flag(),
            self.lookup_timeout().as_secs(),
            self.cache_timeout().as_secs(),
            self.result_domain()
        )
    }
}

#[cfg(test)]
#[path = "wins_tests.rs"]
mod wins_tests;
