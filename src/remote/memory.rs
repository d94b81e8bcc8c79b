// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-process [`ManagementConnection`].
//!
//! Behaves like a management service holding zone and record instances, for
//! exercising [`RemoteServer`](super::RemoteServer) without a real server.
//! Every modification re-keys the instance, the way servers that derive
//! instance paths from record data do.

use std::cell::{Cell, RefCell};

use super::{InstanceFilter, ManagedInstance, ManagementConnection, PropertySet};
use crate::constants::{
    CLASS_RESOURCE_RECORD, CLASS_ZONE, PROP_CONTAINER_NAME, PROP_REVERSE, PROP_SERVER_NAME,
    PROP_ZONE_NAME, PROP_ZONE_TYPE,
};
use crate::dns_errors::{DnsError, Result};
use crate::zone::ZoneType;

/// Management connection backed by process memory.
#[derive(Debug)]
pub struct MemoryConnection {
    server_name: String,
    zones: RefCell<Vec<ManagedInstance>>,
    instances: RefCell<Vec<ManagedInstance>>,
    next_id: Cell<u64>,
    offline: Cell<bool>,
}

impl MemoryConnection {
    /// A connection to an empty server named `server_name`.
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            zones: RefCell::new(Vec::new()),
            instances: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            offline: Cell::new(false),
        }
    }

    /// Host a zone.
    pub fn add_zone(&self, name: &str, zone_type: ZoneType, reverse: bool) {
        let mut properties = PropertySet::new();
        properties.insert(PROP_ZONE_NAME.to_string(), name.into());
        properties.insert(PROP_ZONE_TYPE.to_string(), zone_type.code().into());
        properties.insert(PROP_REVERSE.to_string(), reverse.into());
        properties.insert(PROP_SERVER_NAME.to_string(), self.server_name.as_str().into());

        let path = self.path_for(CLASS_ZONE);
        self.zones.borrow_mut().push(ManagedInstance {
            path,
            class: CLASS_ZONE.to_string(),
            properties,
        });
    }

    /// Host a raw zone instance.
    pub fn add_zone_instance(&self, properties: PropertySet) {
        let path = self.path_for(CLASS_ZONE);
        self.zones.borrow_mut().push(ManagedInstance {
            path,
            class: CLASS_ZONE.to_string(),
            properties,
        });
    }

    /// Stop hosting a zone and every record it contains.
    pub fn remove_zone(&self, name: &str) {
        let matches = |instance: &ManagedInstance, property: &str| {
            instance
                .string(property)
                .is_some_and(|value| value.eq_ignore_ascii_case(name))
        };
        self.zones
            .borrow_mut()
            .retain(|zone| !matches(zone, PROP_ZONE_NAME));
        self.instances
            .borrow_mut()
            .retain(|record| !matches(record, PROP_CONTAINER_NAME));
    }

    /// Store a record instance directly, bypassing any validation.
    pub fn insert_instance(&self, class: &str, properties: PropertySet) -> String {
        let path = self.path_for(class);
        self.instances.borrow_mut().push(ManagedInstance {
            path: path.clone(),
            class: class.to_string(),
            properties,
        });
        path
    }

    /// Every stored record instance, in creation order.
    #[must_use]
    pub fn instances(&self) -> Vec<ManagedInstance> {
        self.instances.borrow().clone()
    }

    /// The record instance at `path`, if it exists.
    #[must_use]
    pub fn instance(&self, path: &str) -> Option<ManagedInstance> {
        self.instances
            .borrow()
            .iter()
            .find(|instance| instance.path == path)
            .cloned()
    }

    /// Make every call fail with a connection error until set back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn path_for(&self, class: &str) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("{class}.Id={id}")
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.get() {
            return Err(DnsError::Connection(format!(
                "server '{}' is unreachable",
                self.server_name
            )));
        }
        Ok(())
    }

    fn position(&self, path: &str) -> Result<usize> {
        self.instances
            .borrow()
            .iter()
            .position(|instance| instance.path == path)
            .ok_or_else(|| DnsError::Connection(format!("instance '{path}' was not found")))
    }
}

impl ManagementConnection for MemoryConnection {
    fn server_name(&self) -> Result<String> {
        self.ensure_online()?;
        Ok(self.server_name.clone())
    }

    fn enumerate_zones(&self) -> Result<Vec<ManagedInstance>> {
        self.ensure_online()?;
        Ok(self.zones.borrow().clone())
    }

    fn query_instances(
        &self,
        class: &str,
        filter: &InstanceFilter,
    ) -> Result<Vec<ManagedInstance>> {
        self.ensure_online()?;
        let every_class = class.eq_ignore_ascii_case(CLASS_RESOURCE_RECORD);
        Ok(self
            .instances
            .borrow()
            .iter()
            .filter(|instance| every_class || instance.class.eq_ignore_ascii_case(class))
            .filter(|instance| filter.matches(&instance.properties))
            .cloned()
            .collect())
    }

    fn create_instance(&self, class: &str, properties: &PropertySet) -> Result<String> {
        self.ensure_online()?;
        Ok(self.insert_instance(class, properties.clone()))
    }

    fn modify_instance(&self, path: &str, properties: &PropertySet) -> Result<String> {
        self.ensure_online()?;
        let index = self.position(path)?;
        let mut instances = self.instances.borrow_mut();
        let new_path = self.path_for(&instances[index].class);

        let instance = &mut instances[index];
        instance.path = new_path.clone();
        instance
            .properties
            .extend(properties.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(new_path)
    }

    fn delete_instance(&self, path: &str) -> Result<()> {
        self.ensure_online()?;
        let index = self.position(path)?;
        self.instances.borrow_mut().remove(index);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
