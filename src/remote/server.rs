// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Server bound to a management connection.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

use super::registry::ClassRegistry;
use super::zone::RemoteZone;
use super::{ManagedInstance, ManagementConnection};
use crate::config::ProviderConfig;
use crate::constants::{PROP_REVERSE, PROP_ZONE_NAME, PROP_ZONE_TYPE};
use crate::dns_errors::{DnsError, Result};
use crate::server::Server;
use crate::zone::{is_reverse_name, Zone, ZoneTemplate, ZoneType};

/// A DNS server reached through a [`ManagementConnection`].
///
/// Zones are enumerated from the connection on every [`Server::zones`] call.
/// A zone that is still hosted keeps the same `Rc` across calls, so records
/// stay linked to it; a zone that disappears is detached.
///
/// Zone creation and deletion are not available through this backend.
pub struct RemoteServer {
    me: Weak<RemoteServer>,
    connection: Rc<dyn ManagementConnection>,
    registry: Rc<ClassRegistry>,
    domain_name: String,
    zones: RefCell<Vec<Rc<RemoteZone>>>,
    closed: Cell<bool>,
}

impl RemoteServer {
    /// Connect to a server using the given class registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot report the server name.
    pub fn connect(
        connection: Rc<dyn ManagementConnection>,
        registry: ClassRegistry,
    ) -> Result<Rc<Self>> {
        let domain_name = connection.server_name()?;
        info!(server = %domain_name, classes = registry.len(), "Connected to DNS server");

        Ok(Rc::new_cyclic(|me| Self {
            me: me.clone(),
            connection,
            registry: Rc::new(registry),
            domain_name,
            zones: RefCell::new(Vec::new()),
            closed: Cell::new(false),
        }))
    }

    /// Connect to a server, building the class registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot report the server name.
    pub fn from_config(
        connection: Rc<dyn ManagementConnection>,
        config: &ProviderConfig,
    ) -> Result<Rc<Self>> {
        Self::connect(connection, ClassRegistry::from_config(config))
    }

    /// The class registry this server translates records with.
    #[must_use]
    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    fn zone_template(instance: &ManagedInstance) -> Result<ZoneTemplate> {
        let name = instance.string(PROP_ZONE_NAME).ok_or_else(|| {
            DnsError::invalid_argument(
                PROP_ZONE_NAME,
                format!("zone instance '{}' has no name", instance.path),
            )
        })?;
        let zone_type = match instance.unsigned(PROP_ZONE_TYPE) {
            None => ZoneType::default(),
            Some(code) => u32::try_from(code)
                .ok()
                .and_then(ZoneType::from_code)
                .ok_or_else(|| {
                    DnsError::invalid_argument(
                        PROP_ZONE_TYPE,
                        format!("zone '{name}' has unknown zone type {code}"),
                    )
                })?,
        };
        let reverse = instance
            .flag(PROP_REVERSE)
            .unwrap_or_else(|| is_reverse_name(name));

        Ok(ZoneTemplate {
            domain_name: name.to_string(),
            zone_type,
            reverse,
        })
    }

    /// Re-enumerate zones, keeping the existing `Rc` of every zone still hosted.
    fn refresh_zones(&self) -> Result<Vec<Rc<RemoteZone>>> {
        let templates: Vec<ZoneTemplate> = self
            .connection
            .enumerate_zones()?
            .iter()
            .filter_map(|instance| match Self::zone_template(instance) {
                Ok(template) => Some(template),
                Err(e) => {
                    warn!(
                        server = %self.domain_name,
                        path = %instance.path,
                        error = %e,
                        "Skipping zone instance"
                    );
                    None
                }
            })
            .collect();

        let mut zones = self.zones.borrow_mut();
        let previous = std::mem::take(&mut *zones);

        for template in &templates {
            let existing = previous
                .iter()
                .find(|z| {
                    z.domain_name().eq_ignore_ascii_case(&template.domain_name)
                        && z.zone_type() == template.zone_type
                })
                .cloned();
            let zone = existing.unwrap_or_else(|| {
                RemoteZone::new(
                    self.me.clone(),
                    Rc::clone(&self.connection),
                    Rc::clone(&self.registry),
                    self.domain_name.clone(),
                    template,
                )
            });
            zones.push(zone);
        }

        for stale in previous
            .iter()
            .filter(|old| !zones.iter().any(|z| Rc::ptr_eq(z, *old)))
        {
            debug!(
                server = %self.domain_name,
                zone = %stale.domain_name(),
                "Zone no longer hosted"
            );
            stale.detach();
        }

        Ok(zones.clone())
    }
}

impl Server for RemoteServer {
    fn domain_name(&self) -> &str {
        &self.domain_name
    }

    fn zones(&self) -> Result<Vec<Rc<dyn Zone>>> {
        if self.closed.get() {
            return Ok(Vec::new());
        }
        Ok(self
            .refresh_zones()?
            .into_iter()
            .map(|zone| zone as Rc<dyn Zone>)
            .collect())
    }

    fn create_zone(&self, template: &ZoneTemplate) -> Result<Rc<dyn Zone>> {
        Err(DnsError::not_supported(format!(
            "creating zone '{}' through a management connection",
            template.domain_name
        )))
    }

    fn delete_zone_named(&self, name: &str) -> Result<()> {
        Err(DnsError::not_supported(format!(
            "deleting zone '{name}' through a management connection"
        )))
    }

    fn close(&self) {
        if self.closed.replace(true) {
            return;
        }
        let zones: Vec<_> = self.zones.borrow_mut().drain(..).collect();
        for zone in &zones {
            zone.detach();
        }
        info!(server = %self.domain_name, zones = zones.len(), "Closed server");
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
