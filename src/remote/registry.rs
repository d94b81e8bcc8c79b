// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Record type to management class mapping.

use std::collections::BTreeMap;

use crate::config::ProviderConfig;
use crate::constants::{RECORD_CLASS_PREFIX, RECORD_CLASS_SUFFIX};
use crate::dns_errors::{DnsError, Result};
use crate::records::RecordType;

/// Obsolete types the standard table leaves out.
const LEGACY_TYPES: [RecordType; 3] = [RecordType::MD, RecordType::MF, RecordType::NXT];

/// Immutable two-way map between record types and management class names.
///
/// Build one at startup and hand it to the backend; lookups never change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRegistry {
    by_type: BTreeMap<RecordType, String>,
    by_class: BTreeMap<String, RecordType>,
}

impl ClassRegistry {
    /// An empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_type: BTreeMap::new(),
            by_class: BTreeMap::new(),
        }
    }

    /// The standard table: `MicrosoftDNS_{TYPE}Type` for every supported type.
    #[must_use]
    pub fn standard() -> Self {
        RecordType::ALL
            .iter()
            .filter(|t| !LEGACY_TYPES.contains(*t))
            .fold(Self::empty(), |registry, t| {
                registry.with_class(
                    *t,
                    format!("{RECORD_CLASS_PREFIX}{}{RECORD_CLASS_SUFFIX}", t.as_str()),
                )
            })
    }

    /// The standard table with the configuration's class overrides applied.
    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        config
            .class_overrides
            .iter()
            .fold(Self::standard(), |registry, (t, class)| {
                registry.with_class(*t, class.clone())
            })
    }

    /// Map `record_type` to `class`, replacing any previous mapping for either.
    #[must_use]
    pub fn with_class(mut self, record_type: RecordType, class: impl Into<String>) -> Self {
        let class = class.into();
        if let Some(previous) = self.by_type.remove(&record_type) {
            self.by_class.remove(&previous.to_ascii_lowercase());
        }
        if let Some(previous) = self.by_class.remove(&class.to_ascii_lowercase()) {
            self.by_type.remove(&previous);
        }
        self.by_class.insert(class.to_ascii_lowercase(), record_type);
        self.by_type.insert(record_type, class);
        self
    }

    /// Class name for a record type.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::NotSupported`] if the type has no class.
    pub fn class_for(&self, record_type: RecordType) -> Result<&str> {
        self.by_type
            .get(&record_type)
            .map(String::as_str)
            .ok_or_else(|| {
                DnsError::not_supported(format!("{record_type} records have no management class"))
            })
    }

    /// Record type for a class name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::NotSupported`] if no type maps to the class.
    pub fn type_for(&self, class: &str) -> Result<RecordType> {
        self.by_class
            .get(&class.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| {
                DnsError::not_supported(format!(
                    "management class '{class}' is not a known record class"
                ))
            })
    }

    /// Whether a record type has a class.
    #[must_use]
    pub fn supports(&self, record_type: RecordType) -> bool {
        self.by_type.contains_key(&record_type)
    }

    /// Supported record types, in mnemonic order.
    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.by_type.keys().copied()
    }

    /// Number of mapped types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Whether no type is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
