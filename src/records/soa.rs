// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Start-of-authority record data.
//!
//! Every zone carries exactly one SOA record. Zones seed it at creation and it
//! is only ever edited in place; [`Zone::create_record`](crate::zone::Zone::create_record)
//! refuses SOA templates.

use chrono::{Datelike, NaiveDate};
use std::time::Duration;

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, Result};

/// SOA record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    serial: Tracked<u32>,
    primary_server: Tracked<String>,
    responsible_party: Tracked<String>,
    refresh: Tracked<Duration>,
    retry: Tracked<Duration>,
    expire: Tracked<Duration>,
    minimum_ttl: Tracked<Duration>,
}

impl SoaData {
    /// Create SOA record data.
    ///
    /// # Arguments
    /// * `serial` - Zone serial number
    /// * `primary_server` - Primary name server for the zone
    /// * `responsible_party` - Mailbox of the zone administrator, `@` written as `.`
    /// * `refresh` - How often secondaries check for updates
    /// * `retry` - How long secondaries wait after a failed refresh
    /// * `expire` - When secondaries stop answering without a refresh
    /// * `minimum_ttl` - Negative caching TTL
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`](crate::dns_errors::DnsError::InvalidArgument)
    /// if `primary_server` or `responsible_party` is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        serial: u32,
        primary_server: impl Into<String>,
        responsible_party: impl Into<String>,
        refresh: Duration,
        retry: Duration,
        expire: Duration,
        minimum_ttl: Duration,
    ) -> Result<Self> {
        let primary_server = primary_server.into();
        let responsible_party = responsible_party.into();
        require_non_blank("primary_server", &primary_server)?;
        require_non_blank("responsible_party", &responsible_party)?;

        Ok(Self {
            serial: Tracked::new(serial),
            primary_server: Tracked::new(primary_server),
            responsible_party: Tracked::new(responsible_party),
            refresh: Tracked::new(refresh),
            retry: Tracked::new(retry),
            expire: Tracked::new(expire),
            minimum_ttl: Tracked::new(minimum_ttl),
        })
    }

    /// Build a `YYYYMMDDnn` serial for `date` and a two-digit `revision`.
    ///
    /// Revisions above 99 are clamped to 99. Years past 4294 do not fit the
    /// layout and saturate to `u32::MAX`.
    #[must_use]
    pub fn date_serial(date: NaiveDate, revision: u32) -> u32 {
        let year = u32::try_from(date.year()).unwrap_or(0);
        year
            .checked_mul(1_000_000)
            .and_then(|serial| serial.checked_add(date.month() * 10_000))
            .and_then(|serial| serial.checked_add(date.day() * 100 + revision.min(99)))
            .unwrap_or(u32::MAX)
    }

    /// The zone serial number.
    #[must_use]
    pub fn serial(&self) -> u32 {
        *self.serial.get()
    }

    /// Change the serial number.
    pub fn set_serial(&mut self, serial: u32) {
        self.serial.set(serial);
    }

    /// Advance the serial by one using RFC 1982 serial arithmetic.
    pub fn increment_serial(&mut self) {
        let next = self.serial().wrapping_add(1);
        self.serial.set(next);
    }

    /// The primary name server.
    #[must_use]
    pub fn primary_server(&self) -> &str {
        self.primary_server.get()
    }

    /// Change the primary name server.
    ///
    /// # Errors
    ///
    /// Returns an error if `primary_server` is blank.
    pub fn set_primary_server(&mut self, primary_server: impl Into<String>) -> Result<()> {
        let primary_server = primary_server.into();
        require_non_blank("primary_server", &primary_server)?;
        self.primary_server.set(primary_server);
        Ok(())
    }

    /// The responsible party's mailbox.
    #[must_use]
    pub fn responsible_party(&self) -> &str {
        self.responsible_party.get()
    }

    /// Change the responsible party's mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if `responsible_party` is blank.
    pub fn set_responsible_party(&mut self, responsible_party: impl Into<String>) -> Result<()> {
        let responsible_party = responsible_party.into();
        require_non_blank("responsible_party", &responsible_party)?;
        self.responsible_party.set(responsible_party);
        Ok(())
    }

    /// The refresh interval.
    #[must_use]
    pub fn refresh(&self) -> Duration {
        *self.refresh.get()
    }

    /// Change the refresh interval.
    pub fn set_refresh(&mut self, refresh: Duration) {
        self.refresh.set(refresh);
    }

    /// The retry interval.
    #[must_use]
    pub fn retry(&self) -> Duration {
        *self.retry.get()
    }

    /// Change the retry interval.
    pub fn set_retry(&mut self, retry: Duration) {
        self.retry.set(retry);
    }

    /// The expire interval.
    #[must_use]
    pub fn expire(&self) -> Duration {
        *self.expire.get()
    }

    /// Change the expire interval.
    pub fn set_expire(&mut self, expire: Duration) {
        self.expire.set(expire);
    }

    /// The minimum (negative caching) TTL.
    #[must_use]
    pub fn minimum_ttl(&self) -> Duration {
        *self.minimum_ttl.get()
    }

    /// Change the minimum TTL.
    pub fn set_minimum_ttl(&mut self, minimum_ttl: Duration) {
        self.minimum_ttl.set(minimum_ttl);
    }
}

impl RecordKind for SoaData {
    fn has_changes(&self) -> bool {
        self.serial.is_dirty()
            || self.primary_server.is_dirty()
            || self.responsible_party.is_dirty()
            || self.refresh.is_dirty()
            || self.retry.is_dirty()
            || self.expire.is_dirty()
            || self.minimum_ttl.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.serial.mark_saved();
        self.primary_server.mark_saved();
        self.responsible_party.mark_saved();
        self.refresh.mark_saved();
        self.retry.mark_saved();
        self.expire.mark_saved();
        self.minimum_ttl.mark_saved();
    }

    fn data_text(&self) -> String {
        format!(
            "[{}], {}, {}",
            self.serial(),
            self.primary_server(),
            self.responsible_party()
        )
    }
}

#[cfg(test)]
#[path = "soa_tests.rs"]
mod soa_tests;
