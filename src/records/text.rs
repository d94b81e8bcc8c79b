// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Free-text records: TXT, HINFO, ISDN and X25.

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, Result};

/// TXT record data: descriptive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtData {
    text: Tracked<String>,
}

impl TxtData {
    /// Create TXT record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is blank.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        require_non_blank("descriptive_text", &text)?;
        Ok(Self {
            text: Tracked::new(text),
        })
    }

    /// The descriptive text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.get()
    }

    /// Change the descriptive text.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is blank.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        require_non_blank("descriptive_text", &text)?;
        self.text.set(text);
        Ok(())
    }
}

impl RecordKind for TxtData {
    fn has_changes(&self) -> bool {
        self.text.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.text.mark_saved();
    }

    fn data_text(&self) -> String {
        self.text().to_string()
    }
}

/// HINFO record data: host CPU and operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HinfoData {
    cpu: Tracked<String>,
    os: Tracked<String>,
}

impl HinfoData {
    /// Create HINFO record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `cpu` or `os` is blank.
    pub fn new(cpu: impl Into<String>, os: impl Into<String>) -> Result<Self> {
        let cpu = cpu.into();
        let os = os.into();
        require_non_blank("cpu", &cpu)?;
        require_non_blank("os", &os)?;
        Ok(Self {
            cpu: Tracked::new(cpu),
            os: Tracked::new(os),
        })
    }

    /// The CPU type.
    #[must_use]
    pub fn cpu(&self) -> &str {
        self.cpu.get()
    }

    /// Change the CPU type.
    ///
    /// # Errors
    ///
    /// Returns an error if `cpu` is blank.
    pub fn set_cpu(&mut self, cpu: impl Into<String>) -> Result<()> {
        let cpu = cpu.into();
        require_non_blank("cpu", &cpu)?;
        self.cpu.set(cpu);
        Ok(())
    }

    /// The operating system.
    #[must_use]
    pub fn os(&self) -> &str {
        self.os.get()
    }

    /// Change the operating system.
    ///
    /// # Errors
    ///
    /// Returns an error if `os` is blank.
    pub fn set_os(&mut self, os: impl Into<String>) -> Result<()> {
        let os = os.into();
        require_non_blank("os", &os)?;
        self.os.set(os);
        Ok(())
    }
}

impl RecordKind for HinfoData {
    fn has_changes(&self) -> bool {
        self.cpu.is_dirty() || self.os.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.cpu.mark_saved();
        self.os.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("{}, {}", self.cpu(), self.os())
    }
}

/// ISDN record data: an ISDN number and optional subaddress (RFC 1183).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsdnData {
    isdn_number: Tracked<String>,
    sub_address: Tracked<String>,
}

impl IsdnData {
    /// Create ISDN record data. An empty `sub_address` means none.
    ///
    /// # Errors
    ///
    /// Returns an error if `isdn_number` is blank.
    pub fn new(isdn_number: impl Into<String>, sub_address: impl Into<String>) -> Result<Self> {
        let isdn_number = isdn_number.into();
        require_non_blank("isdn_number", &isdn_number)?;
        Ok(Self {
            isdn_number: Tracked::new(isdn_number),
            sub_address: Tracked::new(sub_address.into()),
        })
    }

    /// The ISDN number.
    #[must_use]
    pub fn isdn_number(&self) -> &str {
        self.isdn_number.get()
    }

    /// Change the ISDN number.
    ///
    /// # Errors
    ///
    /// Returns an error if `isdn_number` is blank.
    pub fn set_isdn_number(&mut self, isdn_number: impl Into<String>) -> Result<()> {
        let isdn_number = isdn_number.into();
        require_non_blank("isdn_number", &isdn_number)?;
        self.isdn_number.set(isdn_number);
        Ok(())
    }

    /// The subaddress, empty if none.
    #[must_use]
    pub fn sub_address(&self) -> &str {
        self.sub_address.get()
    }

    /// Change the subaddress.
    pub fn set_sub_address(&mut self, sub_address: impl Into<String>) {
        self.sub_address.set(sub_address.into());
    }
}

impl RecordKind for IsdnData {
    fn has_changes(&self) -> bool {
        self.isdn_number.is_dirty() || self.sub_address.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.isdn_number.mark_saved();
        self.sub_address.mark_saved();
    }

    fn data_text(&self) -> String {
        if self.sub_address().is_empty() {
            self.isdn_number().to_string()
        } else {
            format!("{}, {}", self.isdn_number(), self.sub_address())
        }
    }
}

/// X25 record data: a PSDN address (RFC 1183).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X25Data {
    psdn_address: Tracked<String>,
}

impl X25Data {
    /// Create X25 record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `psdn_address` is blank.
    pub fn new(psdn_address: impl Into<String>) -> Result<Self> {
        let psdn_address = psdn_address.into();
        require_non_blank("psdn_address", &psdn_address)?;
        Ok(Self {
            psdn_address: Tracked::new(psdn_address),
        })
    }

    /// The PSDN address.
    #[must_use]
    pub fn psdn_address(&self) -> &str {
        self.psdn_address.get()
    }

    /// Change the PSDN address.
    ///
    /// # Errors
    ///
    /// Returns an error if `psdn_address` is blank.
    pub fn set_psdn_address(&mut self, psdn_address: impl Into<String>) -> Result<()> {
        let psdn_address = psdn_address.into();
        require_non_blank("psdn_address", &psdn_address)?;
        self.psdn_address.set(psdn_address);
        Ok(())
    }
}

impl RecordKind for X25Data {
    fn has_changes(&self) -> bool {
        self.psdn_address.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.psdn_address.mark_saved();
    }

    fn data_text(&self) -> String {
        self.psdn_address().to_string()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
