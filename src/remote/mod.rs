// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Remote backend over a DNS management connection.
//!
//! The backend binds the server/zone/record model to a management service that
//! exposes zones and records as class instances with named properties, in the
//! style of the Windows DNS provider. The transport is abstracted behind
//! [`ManagementConnection`]; this module only translates between records and
//! property sets.
//!
//! - [`registry`] maps record types to management class names
//! - [`codec`] converts records to and from property sets
//! - [`memory`] provides an in-process connection for tests and demos
//! - [`RemoteServer`] and [`RemoteZone`] implement [`Server`](crate::server::Server)
//!   and [`Zone`](crate::zone::Zone) on top of a connection

pub mod codec;
pub mod memory;
pub mod registry;
mod server;
mod zone;

pub use codec::{format_record_data, parse_record_data, record_from_instance, record_to_properties};
pub use memory::MemoryConnection;
pub use registry::ClassRegistry;
pub use server::RemoteServer;
pub use zone::RemoteZone;

use serde_json::Value;
use std::collections::BTreeMap;

use crate::dns_errors::Result;

/// Named properties of a management instance, in property-name order.
pub type PropertySet = BTreeMap<String, Value>;

/// A class instance returned by a management connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedInstance {
    /// Path that identifies the instance on the server
    pub path: String,
    /// Concrete class of the instance
    pub class: String,
    /// Instance properties
    pub properties: PropertySet,
}

impl ManagedInstance {
    /// A string property, if present.
    #[must_use]
    pub fn string(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    /// An unsigned integer property, if present.
    #[must_use]
    pub fn unsigned(&self, name: &str) -> Option<u64> {
        self.properties.get(name).and_then(Value::as_u64)
    }

    /// A boolean property, if present.
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.properties.get(name).and_then(Value::as_bool)
    }
}

/// Property conditions an instance must match to be returned by a query.
///
/// String conditions compare ignoring ASCII case; every other value must be
/// equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceFilter {
    conditions: BTreeMap<String, Value>,
}

impl InstanceFilter {
    /// A filter matching every instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition on one property.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(property.into(), value.into());
        self
    }

    /// The conditions, keyed by property name.
    #[must_use]
    pub fn conditions(&self) -> &BTreeMap<String, Value> {
        &self.conditions
    }

    /// Whether a property set meets every condition.
    #[must_use]
    pub fn matches(&self, properties: &PropertySet) -> bool {
        self.conditions.iter().all(|(name, expected)| {
            match (properties.get(name), expected) {
                (Some(Value::String(actual)), Value::String(expected)) => {
                    actual.eq_ignore_ascii_case(expected)
                }
                (Some(actual), expected) => actual == expected,
                (None, _) => false,
            }
        })
    }
}

/// Blocking connection to a DNS management service.
///
/// Implementations report transport failures as
/// [`DnsError::Connection`](crate::dns_errors::DnsError::Connection).
pub trait ManagementConnection {
    /// Domain name of the DNS server behind the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached.
    fn server_name(&self) -> Result<String>;

    /// Every zone instance hosted by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached.
    fn enumerate_zones(&self) -> Result<Vec<ManagedInstance>>;

    /// Instances of `class`, including derived classes, that match `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or rejects the query.
    fn query_instances(&self, class: &str, filter: &InstanceFilter)
        -> Result<Vec<ManagedInstance>>;

    /// Create an instance of `class` and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the instance.
    fn create_instance(&self, class: &str, properties: &PropertySet) -> Result<String>;

    /// Modify the instance at `path` and return its new path.
    ///
    /// Servers may re-key an instance when its data changes, so callers must
    /// use the returned path from then on.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance does not exist or the server rejects
    /// the change.
    fn modify_instance(&self, path: &str, properties: &PropertySet) -> Result<String>;

    /// Delete the instance at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance does not exist.
    fn delete_instance(&self, path: &str) -> Result<()>;
}
