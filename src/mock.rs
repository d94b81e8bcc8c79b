// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory backend.
//!
//! [`MockServer`] keeps zones and records in process memory. It implements the
//! full [`Server`] and [`Zone`] contracts and is what tests and demos run
//! against.
//!
//! Each [`MockZone`] stores its records in an insertion-ordered table keyed by
//! the [`ProviderToken`] it assigned when the record was created. Callers only
//! ever see attached copies of stored records, so nothing they do to a record
//! reaches storage until it is saved.
//!
//! # Example
//!
//! ```
//! use std::net::Ipv4Addr;
//! use std::time::Duration;
//! use zonekeeper::mock::MockServer;
//! use zonekeeper::records::{AData, Record, RecordType};
//! use zonekeeper::server::Server;
//! use zonekeeper::zone::Zone;
//!
//! let server = MockServer::new("dns.mock");
//! let zone = server.create_zone_named("example.mock").unwrap();
//!
//! let template = Record::new(
//!     "www.example.mock",
//!     Duration::from_secs(300),
//!     AData::new(Ipv4Addr::new(192, 0, 2, 10)),
//! )
//! .unwrap();
//! zone.create_record(&template).unwrap();
//!
//! let found = zone
//!     .records_of_type_named(RecordType::A, "WWW.example.mock")
//!     .unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].data_text(), "192.0.2.10");
//! ```

use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::constants::SOA_SERIAL_INITIAL_REVISION;
use crate::dns_errors::{require_non_blank, DnsError, Result};
use crate::records::{NsData, ProviderToken, Record, RecordType, SoaData};
use crate::server::{zone_not_found, Server};
use crate::zone::{Zone, ZoneLink, ZoneTemplate, ZoneType};

/// In-memory DNS server.
#[derive(Debug)]
pub struct MockServer {
    me: Weak<MockServer>,
    config: ProviderConfig,
    zones: RefCell<Vec<Rc<MockZone>>>,
    closed: Cell<bool>,
}

impl MockServer {
    /// Create a server with default settings.
    pub fn new(domain_name: impl Into<String>) -> Rc<Self> {
        Self::with_config(&ProviderConfig::for_server(domain_name))
    }

    /// Create a server from configuration.
    pub fn with_config(config: &ProviderConfig) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            config: config.clone(),
            zones: RefCell::new(Vec::new()),
            closed: Cell::new(false),
        })
    }

    /// The configuration the server was created with.
    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Whether [`Server::close`] has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    fn seed_soa(&self, zone: &MockZone) -> Result<Record> {
        let soa = &self.config.soa;
        let serial = SoaData::date_serial(Utc::now().date_naive(), SOA_SERIAL_INITIAL_REVISION);
        let data = SoaData::new(
            serial,
            self.domain_name(),
            format!("{}.{}", soa.responsible_person, zone.domain_name()),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum_ttl(),
        )?;
        Record::new(zone.domain_name(), self.config.default_ttl(), data)
    }

    fn seed_ns(&self, zone: &MockZone) -> Result<Record> {
        Record::new(
            zone.domain_name(),
            self.config.default_ttl(),
            NsData::new(self.domain_name())?,
        )
    }
}

impl Server for MockServer {
    fn domain_name(&self) -> &str {
        &self.config.server_name
    }

    fn zones(&self) -> Result<Vec<Rc<dyn Zone>>> {
        Ok(self
            .zones
            .borrow()
            .iter()
            .map(|zone| Rc::clone(zone) as Rc<dyn Zone>)
            .collect())
    }

    fn create_zone(&self, template: &ZoneTemplate) -> Result<Rc<dyn Zone>> {
        if self.closed.get() {
            return Err(DnsError::invalid_operation(format!(
                "server '{}' is closed",
                self.domain_name()
            )));
        }
        require_non_blank("domain_name", &template.domain_name)?;

        let duplicate = self
            .zones
            .borrow()
            .iter()
            .any(|z| z.domain_name().eq_ignore_ascii_case(&template.domain_name));
        if duplicate {
            return Err(DnsError::invalid_argument(
                "domain_name",
                format!("zone '{}' already exists", template.domain_name),
            ));
        }

        let zone = MockZone::new(self.me.clone(), template);
        zone.store(self.seed_soa(&zone)?);
        zone.store(self.seed_ns(&zone)?);

        info!(
            server = %self.domain_name(),
            zone = %zone.domain_name(),
            zone_type = %zone.zone_type(),
            "Created zone"
        );

        self.zones.borrow_mut().push(Rc::clone(&zone));
        Ok(zone)
    }

    fn delete_zone_named(&self, name: &str) -> Result<()> {
        let zone = {
            let mut zones = self.zones.borrow_mut();
            let index = zones
                .iter()
                .position(|z| z.domain_name().eq_ignore_ascii_case(name))
                .ok_or_else(|| zone_not_found(name))?;
            zones.remove(index)
        };
        zone.detach();

        info!(server = %self.domain_name(), zone = %zone.domain_name(), "Deleted zone");
        Ok(())
    }

    fn close(&self) {
        if self.closed.replace(true) {
            return;
        }
        let zones: Vec<_> = self.zones.borrow_mut().drain(..).collect();
        for zone in &zones {
            zone.detach();
        }
        info!(server = %self.domain_name(), zones = zones.len(), "Closed server");
    }
}

#[derive(Debug)]
struct StoredRecord {
    token: ProviderToken,
    record: Record,
}

/// Zone held in memory by a [`MockServer`].
#[derive(Debug)]
pub struct MockZone {
    me: Weak<MockZone>,
    server: RefCell<Weak<MockServer>>,
    domain_name: String,
    zone_type: ZoneType,
    reverse: bool,
    records: RefCell<Vec<StoredRecord>>,
    next_token: Cell<u64>,
    detached: Cell<bool>,
}

impl MockZone {
    fn new(server: Weak<MockServer>, template: &ZoneTemplate) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            server: RefCell::new(server),
            domain_name: template.domain_name.clone(),
            zone_type: template.zone_type,
            reverse: template.reverse,
            records: RefCell::new(Vec::new()),
            next_token: Cell::new(1),
            detached: Cell::new(false),
        })
    }

    /// Whether the zone has been deleted or its server closed.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    fn link(&self) -> ZoneLink {
        self.me.clone()
    }

    fn detach(&self) {
        self.detached.set(true);
        *self.server.borrow_mut() = Weak::new();
    }

    fn ensure_attached(&self) -> Result<()> {
        if self.detached.get() {
            return Err(DnsError::invalid_operation(format!(
                "zone '{}' has been removed from its server",
                self.domain_name
            )));
        }
        Ok(())
    }

    /// Append a record to storage under a freshly assigned token.
    fn store(&self, record: Record) -> ProviderToken {
        let id = self.next_token.get();
        self.next_token.set(id + 1);
        let token = ProviderToken::new(id.to_string());

        self.records.borrow_mut().push(StoredRecord {
            token: token.clone(),
            record,
        });
        token
    }

    fn position_of(&self, record: &Record) -> Result<usize> {
        let not_found = || {
            DnsError::invalid_argument(
                "record",
                format!(
                    "{} record '{}' was not found in zone '{}'",
                    record.record_type(),
                    record.name(),
                    self.domain_name
                ),
            )
        };

        if !record.is_linked_to(self) {
            return Err(not_found());
        }
        let token = record.provider_token().ok_or_else(not_found)?;
        self.records
            .borrow()
            .iter()
            .position(|stored| &stored.token == token)
            .ok_or_else(not_found)
    }
}

impl Zone for MockZone {
    fn domain_name(&self) -> &str {
        &self.domain_name
    }

    fn zone_type(&self) -> ZoneType {
        self.zone_type
    }

    fn is_reverse(&self) -> bool {
        self.reverse
    }

    fn server(&self) -> Option<Rc<dyn Server>> {
        self.server
            .borrow()
            .upgrade()
            .map(|server| server as Rc<dyn Server>)
    }

    fn records(&self) -> Result<Vec<Record>> {
        self.ensure_attached()?;
        let link = self.link();
        Ok(self
            .records
            .borrow()
            .iter()
            .map(|stored| {
                stored
                    .record
                    .clone_for(Some(link.clone()), Some(stored.token.clone()))
            })
            .collect())
    }

    fn create_record(&self, template: &Record) -> Result<Record> {
        self.ensure_attached()?;
        if template.record_type() == RecordType::SOA {
            return Err(DnsError::invalid_argument(
                "template",
                format!(
                    "zone '{}' already has an SOA record; edit it instead",
                    self.domain_name
                ),
            ));
        }

        let token = self.store(template.clone_unattached());
        info!(zone = %self.domain_name, record = %template, token = %token, "Created record");

        Ok(template.clone_for(Some(self.link()), Some(token)))
    }

    fn save_record(&self, record: &mut Record) -> Result<()> {
        self.ensure_attached()?;
        let index = self.position_of(record)?;

        if !record.has_changes() {
            debug!(zone = %self.domain_name, record = %record, "Record unchanged, skipping save");
            return Ok(());
        }

        self.records.borrow_mut()[index].record = record.clone_unattached();
        record.provider_saved();
        debug!(zone = %self.domain_name, record = %record, "Saved record");
        Ok(())
    }

    fn delete_record(&self, record: &Record) -> Result<()> {
        self.ensure_attached()?;
        if record.record_type() == RecordType::SOA {
            return Err(DnsError::invalid_argument(
                "record",
                format!(
                    "the SOA record of zone '{}' cannot be deleted",
                    self.domain_name
                ),
            ));
        }
        let index = self.position_of(record)?;

        let removed = self.records.borrow_mut().remove(index);
        info!(
            zone = %self.domain_name,
            record = %removed.record,
            token = %removed.token,
            "Deleted record"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod mock_tests;
