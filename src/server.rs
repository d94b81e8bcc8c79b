// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Server contract shared by every backend.
//!
//! A server owns its zones. Zone names are unique ignoring case, and every
//! lookup by name is case-insensitive.

use std::rc::Rc;

use crate::dns_errors::{DnsError, Result};
use crate::zone::{Zone, ZoneTemplate};

/// A DNS server hosting zones through some backend.
pub trait Server {
    /// The server's own domain name.
    ///
    /// Backends use it as the primary server of the SOA records they seed.
    fn domain_name(&self) -> &str;

    /// Every zone hosted by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot enumerate zones.
    fn zones(&self) -> Result<Vec<Rc<dyn Zone>>>;

    /// Create a zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the name is blank or a zone
    /// with the same name (ignoring case) already exists.
    fn create_zone(&self, template: &ZoneTemplate) -> Result<Rc<dyn Zone>>;

    /// Delete the zone named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if no such zone exists.
    fn delete_zone_named(&self, name: &str) -> Result<()>;

    /// Release every zone the server holds.
    ///
    /// Zones are detached and records linked to them can no longer save or
    /// delete themselves. Calling this more than once has no further effect.
    fn close(&self);

    /// The zone named `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if no such zone exists.
    fn zone(&self, name: &str) -> Result<Rc<dyn Zone>> {
        self.zones()?
            .into_iter()
            .find(|z| z.domain_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| zone_not_found(name))
    }

    /// Create a primary zone from its name.
    ///
    /// # Errors
    ///
    /// See [`Server::create_zone`].
    fn create_zone_named(&self, name: &str) -> Result<Rc<dyn Zone>> {
        self.create_zone(&ZoneTemplate::primary(name))
    }

    /// Delete a zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if the server has no zone with
    /// that name.
    fn delete_zone(&self, zone: &dyn Zone) -> Result<()> {
        self.delete_zone_named(zone.domain_name())
    }

    /// [`Server::zone`], with any failure reported as `None`.
    fn try_zone(&self, name: &str) -> Option<Rc<dyn Zone>> {
        self.zone(name).ok()
    }

    /// [`Server::create_zone`], with any failure reported as `None`.
    fn try_create_zone(&self, template: &ZoneTemplate) -> Option<Rc<dyn Zone>> {
        self.create_zone(template).ok()
    }

    /// [`Server::delete_zone_named`], with any failure reported as `false`.
    fn try_delete_zone(&self, name: &str) -> bool {
        self.delete_zone_named(name).is_ok()
    }
}

/// Error for a zone name the server does not host.
pub(crate) fn zone_not_found(name: &str) -> DnsError {
    DnsError::invalid_argument("name", format!("zone '{name}' was not found"))
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
