// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone contract shared by every backend.
//!
//! A zone owns a collection of records. Backends implement the required
//! methods of [`Zone`]; filtering, search, the try-variants and the SOA/NS
//! accessors are provided on top of [`Zone::records`].
//!
//! Zones are shared as `Rc<dyn Zone>`. Records refer back to their zone through
//! a [`ZoneLink`], a weak reference that never keeps the zone alive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

use crate::constants::{IPV4_REVERSE_SUFFIX, IPV6_REVERSE_SUFFIX};
use crate::dns_errors::{DnsError, Result};
use crate::records::{Record, RecordType};
use crate::server::Server;

/// Non-owning reference from a record to its zone.
pub type ZoneLink = Weak<dyn Zone>;

/// How a server hosts a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneType {
    /// Cached answers from other servers
    Cache,
    /// Authoritative, writable copy
    #[default]
    Primary,
    /// Authoritative copy transferred from a primary
    Secondary,
    /// SOA, NS and glue only
    Stub,
    /// Queries forwarded to other servers
    Forwarder,
}

impl ZoneType {
    /// The numeric code management protocols use for this zone type.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Cache => 0,
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Stub => 3,
            Self::Forwarder => 4,
        }
    }

    /// Look up a zone type by numeric code.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Cache),
            1 => Some(Self::Primary),
            2 => Some(Self::Secondary),
            3 => Some(Self::Stub),
            4 => Some(Self::Forwarder),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "Cache",
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Stub => "Stub",
            Self::Forwarder => "Forwarder",
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a domain name lies under one of the reverse-lookup trees.
#[must_use]
pub fn is_reverse_name(domain_name: &str) -> bool {
    let name = domain_name.trim_end_matches('.').to_ascii_lowercase();
    [IPV4_REVERSE_SUFFIX, IPV6_REVERSE_SUFFIX]
        .iter()
        .any(|suffix| name == *suffix || name.ends_with(&format!(".{suffix}")))
}

/// Description of a zone to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTemplate {
    /// Domain name of the zone
    pub domain_name: String,
    /// How the zone is hosted
    #[serde(default)]
    pub zone_type: ZoneType,
    /// Whether the zone is a reverse-lookup zone
    #[serde(default)]
    pub reverse: bool,
}

impl ZoneTemplate {
    /// Describe a zone, inferring the reverse flag from its name.
    pub fn new(domain_name: impl Into<String>, zone_type: ZoneType) -> Self {
        let domain_name = domain_name.into();
        let reverse = is_reverse_name(&domain_name);
        Self {
            domain_name,
            zone_type,
            reverse,
        }
    }

    /// Describe a primary zone.
    pub fn primary(domain_name: impl Into<String>) -> Self {
        Self::new(domain_name, ZoneType::Primary)
    }
}

/// A DNS zone hosted by a backend.
pub trait Zone {
    /// Domain name of the zone.
    fn domain_name(&self) -> &str;

    /// How the zone is hosted.
    fn zone_type(&self) -> ZoneType;

    /// Whether this is a reverse-lookup zone.
    fn is_reverse(&self) -> bool;

    /// The server hosting this zone, if it is still attached.
    fn server(&self) -> Option<Rc<dyn Server>>;

    /// Every record in the zone, read fresh from the backend on each call.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn records(&self) -> Result<Vec<Record>>;

    /// Create a record in the zone from a template.
    ///
    /// The template's values are copied; the template itself is not modified.
    /// The returned record is attached to this zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] for SOA templates; a zone's SOA is
    /// seeded when the zone is created and can only be edited.
    fn create_record(&self, template: &Record) -> Result<Record>;

    /// Persist changes made to a record of this zone.
    ///
    /// Backends skip the write when the record has no changes, and reset its
    /// dirty state after a successful write.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the record does not belong to
    /// this zone.
    fn save_record(&self, record: &mut Record) -> Result<()>;

    /// Remove a record from the zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the record cannot be located
    /// in this zone.
    fn delete_record(&self, record: &Record) -> Result<()>;

    /// Records of one type.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn records_of_type(&self, record_type: RecordType) -> Result<Vec<Record>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.record_type() == record_type)
            .collect())
    }

    /// Records whose owner name matches `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn records_named(&self, name: &str) -> Result<Vec<Record>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.name().eq_ignore_ascii_case(name))
            .collect())
    }

    /// Records of one type whose owner name matches `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn records_of_type_named(&self, record_type: RecordType, name: &str) -> Result<Vec<Record>> {
        Ok(self
            .records_of_type(record_type)?
            .into_iter()
            .filter(|r| r.name().eq_ignore_ascii_case(name))
            .collect())
    }

    /// Records whose rendering contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn search_records(&self, query: &str) -> Result<Vec<Record>> {
        debug!(zone = %self.domain_name(), query = %query, "Searching records");
        Ok(filter_by_text(self.records()?, query))
    }

    /// Records of one type whose rendering contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate the zone.
    fn search_records_of_type(&self, record_type: RecordType, query: &str) -> Result<Vec<Record>> {
        debug!(
            zone = %self.domain_name(),
            record_type = %record_type,
            query = %query,
            "Searching records"
        );
        Ok(filter_by_text(self.records_of_type(record_type)?, query))
    }

    /// [`Zone::create_record`], with any failure reported as `None`.
    fn try_create_record(&self, template: &Record) -> Option<Record> {
        self.create_record(template).ok()
    }

    /// [`Zone::save_record`], with any failure reported as `false`.
    fn try_save_record(&self, record: &mut Record) -> bool {
        self.save_record(record).is_ok()
    }

    /// [`Zone::delete_record`], with any failure reported as `false`.
    fn try_delete_record(&self, record: &Record) -> bool {
        self.delete_record(record).is_ok()
    }

    /// The zone's SOA record.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the zone has no SOA record.
    fn start_of_authority(&self) -> Result<Record> {
        self.records_of_type(RecordType::SOA)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DnsError::invalid_argument(
                    "zone",
                    format!("zone '{}' has no SOA record", self.domain_name()),
                )
            })
    }

    /// The zone's NS records.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the zone has no SOA record.
    fn name_servers(&self) -> Result<Vec<Record>> {
        self.start_of_authority()?;
        self.records_of_type(RecordType::NS)
    }

    /// Delete this zone from its server.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidOperation`] if the zone is not attached to a
    /// server, or whatever the server's delete reports.
    fn delete(&self) -> Result<()> {
        let server = self.server().ok_or_else(|| {
            DnsError::invalid_operation(format!(
                "zone '{}' is not attached to a server",
                self.domain_name()
            ))
        })?;
        server.delete_zone_named(self.domain_name())
    }
}

fn filter_by_text(records: Vec<Record>, query: &str) -> Vec<Record> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.to_string().to_lowercase().contains(&needle))
        .collect()
}

impl fmt::Display for dyn Zone + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DNS {} Zone [{}", self.zone_type(), self.domain_name())?;
        if self.is_reverse() {
            f.write_str(" (Reverse)")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for dyn Zone + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod zone_tests;
