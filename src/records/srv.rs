// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Service locator record data (RFC 2782).
//!
//! SRV owner names have the shape `_service._proto.domain`. The service and
//! protocol are never stored: [`Record::service`](super::Record::service) and
//! [`Record::protocol`](super::Record::protocol) read them from the owner name.

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, DnsError, Result};

/// SRV record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvData {
    priority: Tracked<u16>,
    weight: Tracked<u16>,
    port: Tracked<u16>,
    target: Tracked<String>,
}

impl SrvData {
    /// Create SRV record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is blank.
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Result<Self> {
        let target = target.into();
        require_non_blank("domain_name", &target)?;
        Ok(Self {
            priority: Tracked::new(priority),
            weight: Tracked::new(weight),
            port: Tracked::new(port),
            target: Tracked::new(target),
        })
    }

    /// Priority; lower values are tried first.
    #[must_use]
    pub fn priority(&self) -> u16 {
        *self.priority.get()
    }

    /// Change the priority.
    pub fn set_priority(&mut self, priority: u16) {
        self.priority.set(priority);
    }

    /// Relative weight among targets of equal priority.
    #[must_use]
    pub fn weight(&self) -> u16 {
        *self.weight.get()
    }

    /// Change the weight.
    pub fn set_weight(&mut self, weight: u16) {
        self.weight.set(weight);
    }

    /// The port the service listens on.
    #[must_use]
    pub fn port(&self) -> u16 {
        *self.port.get()
    }

    /// Change the port.
    pub fn set_port(&mut self, port: u16) {
        self.port.set(port);
    }

    /// The host providing the service.
    #[must_use]
    pub fn target(&self) -> &str {
        self.target.get()
    }

    /// Change the target host.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is blank.
    pub fn set_target(&mut self, target: impl Into<String>) -> Result<()> {
        let target = target.into();
        require_non_blank("domain_name", &target)?;
        self.target.set(target);
        Ok(())
    }
}

impl RecordKind for SrvData {
    fn has_changes(&self) -> bool {
        self.priority.is_dirty()
            || self.weight.is_dirty()
            || self.port.is_dirty()
            || self.target.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.priority.mark_saved();
        self.weight.mark_saved();
        self.port.mark_saved();
        self.target.mark_saved();
    }

    fn data_text(&self) -> String {
        format!(
            "[{}][{}][{}] {}",
            self.priority(),
            self.weight(),
            self.port(),
            self.target()
        )
    }

    fn validate_owner(&self, name: &str) -> Result<()> {
        let mut labels = name.splitn(3, '.');
        let service = labels.next().unwrap_or_default();
        let protocol = labels.next().unwrap_or_default();
        let domain = labels.next().unwrap_or_default();

        if service.is_empty() || protocol.is_empty() || domain.is_empty() {
            return Err(DnsError::invalid_format(
                "name",
                format!(
                    "SRV owner name '{name}' must have the form _service._proto.domain (RFC 2782)"
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "srv_tests.rs"]
mod srv_tests;
