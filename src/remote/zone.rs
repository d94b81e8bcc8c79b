// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone bound to a management connection.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

use super::codec::{record_from_instance, record_to_properties};
use super::registry::ClassRegistry;
use super::server::RemoteServer;
use super::{InstanceFilter, ManagedInstance, ManagementConnection};
use crate::constants::{CLASS_RESOURCE_RECORD, PROP_CONTAINER_NAME, PROP_OWNER_NAME};
use crate::dns_errors::{DnsError, Result};
use crate::records::{ProviderToken, Record, RecordType};
use crate::server::Server;
use crate::zone::{Zone, ZoneLink, ZoneTemplate, ZoneType};

/// A zone hosted by a [`RemoteServer`].
///
/// Every query goes to the connection; the zone keeps no record state.
pub struct RemoteZone {
    me: Weak<RemoteZone>,
    server: RefCell<Weak<RemoteServer>>,
    connection: Rc<dyn ManagementConnection>,
    registry: Rc<ClassRegistry>,
    server_name: String,
    domain_name: String,
    zone_type: ZoneType,
    reverse: bool,
    detached: Cell<bool>,
}

impl RemoteZone {
    pub(super) fn new(
        server: Weak<RemoteServer>,
        connection: Rc<dyn ManagementConnection>,
        registry: Rc<ClassRegistry>,
        server_name: String,
        template: &ZoneTemplate,
    ) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            me: me.clone(),
            server: RefCell::new(server),
            connection,
            registry,
            server_name,
            domain_name: template.domain_name.clone(),
            zone_type: template.zone_type,
            reverse: template.reverse,
            detached: Cell::new(false),
        })
    }

    /// Whether the zone has disappeared from its server or the server was closed.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    pub(super) fn detach(&self) {
        self.detached.set(true);
        *self.server.borrow_mut() = Weak::new();
    }

    fn link(&self) -> ZoneLink {
        self.me.clone()
    }

    fn ensure_attached(&self) -> Result<()> {
        if self.detached.get() {
            return Err(DnsError::invalid_operation(format!(
                "zone '{}' is no longer attached to server '{}'",
                self.domain_name, self.server_name
            )));
        }
        Ok(())
    }

    fn zone_filter(&self) -> InstanceFilter {
        InstanceFilter::new().with(PROP_CONTAINER_NAME, self.domain_name.as_str())
    }

    /// Token of a record this zone can write, or `InvalidArgument`.
    fn writable_token(&self, record: &Record) -> Result<ProviderToken> {
        if !record.is_linked_to(self) {
            return Err(DnsError::invalid_argument(
                "record",
                format!(
                    "{} record '{}' does not belong to zone '{}'",
                    record.record_type(),
                    record.name(),
                    self.domain_name
                ),
            ));
        }
        record.provider_token().cloned().ok_or_else(|| {
            DnsError::invalid_argument(
                "record",
                format!(
                    "{} record '{}' has no instance path",
                    record.record_type(),
                    record.name()
                ),
            )
        })
    }

    /// Decode instances, skipping any that cannot be decoded.
    fn decode_all(&self, instances: Vec<ManagedInstance>) -> Vec<Record> {
        instances
            .into_iter()
            .filter_map(|instance| match self.decode(&instance) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        zone = %self.domain_name,
                        path = %instance.path,
                        class = %instance.class,
                        error = %e,
                        "Skipping record instance"
                    );
                    None
                }
            })
            .collect()
    }

    fn decode(&self, instance: &ManagedInstance) -> Result<Record> {
        let record_type = self.registry.type_for(&instance.class)?;
        record_from_instance(instance, record_type, Some(self.link()))
    }
}

impl Zone for RemoteZone {
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
        debug!(zone = %self.domain_name, "Querying records");
        let instances = self
            .connection
            .query_instances(CLASS_RESOURCE_RECORD, &self.zone_filter())?;
        Ok(self.decode_all(instances))
    }

    fn records_of_type(&self, record_type: RecordType) -> Result<Vec<Record>> {
        self.ensure_attached()?;
        let class = self.registry.class_for(record_type)?;
        debug!(zone = %self.domain_name, class = %class, "Querying records");
        let instances = self.connection.query_instances(class, &self.zone_filter())?;
        Ok(self.decode_all(instances))
    }

    fn records_of_type_named(&self, record_type: RecordType, name: &str) -> Result<Vec<Record>> {
        self.ensure_attached()?;
        let class = self.registry.class_for(record_type)?;
        debug!(zone = %self.domain_name, class = %class, name = %name, "Querying records");
        let filter = self.zone_filter().with(PROP_OWNER_NAME, name);
        self.connection
            .query_instances(class, &filter)?
            .iter()
            .map(|instance| record_from_instance(instance, record_type, Some(self.link())))
            .collect()
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

        let class = self.registry.class_for(template.record_type())?;
        let properties = record_to_properties(template, &self.domain_name, &self.server_name)?;
        let path = self.connection.create_instance(class, &properties)?;

        info!(zone = %self.domain_name, record = %template, path = %path, "Created record");
        Ok(template.clone_for(Some(self.link()), Some(ProviderToken::new(path))))
    }

    fn save_record(&self, record: &mut Record) -> Result<()> {
        self.ensure_attached()?;
        let token = self.writable_token(record)?;

        if !record.has_changes() {
            debug!(zone = %self.domain_name, record = %record, "Record unchanged, skipping save");
            return Ok(());
        }

        let properties = record_to_properties(record, &self.domain_name, &self.server_name)?;
        let path = self
            .connection
            .modify_instance(token.as_str(), &properties)?;

        record.set_provider_token(Some(ProviderToken::new(path)));
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
        let token = self.writable_token(record)?;

        self.connection.delete_instance(token.as_str())?;
        info!(zone = %self.domain_name, record = %record, path = %token, "Deleted record");
        Ok(())
    }
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod zone_tests;
