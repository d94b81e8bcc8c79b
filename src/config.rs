// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Provider configuration.
//!
//! Configuration is read once, up front, and handed to the backend that needs
//! it. Every field has a default, so an empty document is a valid
//! configuration.
//!
//! # Example
//!
//! ```
//! use zonekeeper::config::ProviderConfig;
//!
//! let config = ProviderConfig::from_yaml_str(
//!     r#"
//! serverName: dns1.example.com
//! defaultTtlSecs: 600
//! soa:
//!   refreshSecs: 1800
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.server_name, "dns1.example.com");
//! assert_eq!(config.soa.refresh_secs, 1800);
//! assert_eq!(config.soa.retry_secs, 600);
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::constants::{
    DEFAULT_SOA_EXPIRE_SECS, DEFAULT_SOA_MINIMUM_TTL_SECS, DEFAULT_SOA_REFRESH_SECS,
    DEFAULT_SOA_RESPONSIBLE_PERSON, DEFAULT_SOA_RETRY_SECS, DEFAULT_ZONE_TTL_SECS,
};
use crate::records::RecordType;

/// Server name used when none is configured
pub const DEFAULT_SERVER_NAME: &str = "localhost";

/// Timers and mailbox for SOA records seeded into new zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoaDefaults {
    /// Refresh interval in seconds
    pub refresh_secs: u64,
    /// Retry interval in seconds
    pub retry_secs: u64,
    /// Expire interval in seconds
    pub expire_secs: u64,
    /// Negative caching TTL in seconds
    pub minimum_ttl_secs: u64,
    /// Mailbox label prepended to the zone name for the responsible party
    ///
    /// Example: `hostmaster` yields `hostmaster.example.com` for `example.com`
    pub responsible_person: String,
}

impl Default for SoaDefaults {
    fn default() -> Self {
        Self {
            refresh_secs: DEFAULT_SOA_REFRESH_SECS,
            retry_secs: DEFAULT_SOA_RETRY_SECS,
            expire_secs: DEFAULT_SOA_EXPIRE_SECS,
            minimum_ttl_secs: DEFAULT_SOA_MINIMUM_TTL_SECS,
            responsible_person: DEFAULT_SOA_RESPONSIBLE_PERSON.to_string(),
        }
    }
}

impl SoaDefaults {
    /// Refresh interval.
    #[must_use]
    pub fn refresh(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// Retry interval.
    #[must_use]
    pub fn retry(&self) -> Duration {
        Duration::from_secs(self.retry_secs)
    }

    /// Expire interval.
    #[must_use]
    pub fn expire(&self) -> Duration {
        Duration::from_secs(self.expire_secs)
    }

    /// Negative caching TTL.
    #[must_use]
    pub fn minimum_ttl(&self) -> Duration {
        Duration::from_secs(self.minimum_ttl_secs)
    }
}

/// Configuration shared by the backends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// The server's own domain name
    pub server_name: String,

    /// TTL in seconds of the SOA and NS records seeded into new zones
    pub default_ttl_secs: u64,

    /// SOA defaults for new zones
    pub soa: SoaDefaults,

    /// Management class names replacing the standard ones, keyed by record type
    ///
    /// Example: `{ A: "Custom_AType" }`
    pub class_overrides: BTreeMap<RecordType, String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_SERVER_NAME.to_string(),
            default_ttl_secs: DEFAULT_ZONE_TTL_SECS,
            soa: SoaDefaults::default(),
            class_overrides: BTreeMap::new(),
        }
    }
}

impl ProviderConfig {
    /// Configuration for a server with the given name and default settings.
    pub fn for_server(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            ..Self::default()
        }
    }

    /// Parse configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the configuration is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).context("Failed to parse provider configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Check the configuration for values no backend can work with.
    ///
    /// # Errors
    ///
    /// Returns an error if the server name or any class override is blank.
    pub fn validate(&self) -> Result<()> {
        if self.server_name.trim().is_empty() {
            bail!("serverName must not be empty");
        }
        if let Some((record_type, _)) = self
            .class_overrides
            .iter()
            .find(|(_, class)| class.trim().is_empty())
        {
            bail!("classOverrides entry for {record_type} must not be empty");
        }
        Ok(())
    }

    /// TTL of seeded SOA and NS records.
    #[must_use]
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
