// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Mail routing and responsibility records: MX, RT, AFSDB, MINFO and RP.

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, Result};

/// MX record data: a mail exchanger and its preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxData {
    preference: Tracked<u16>,
    exchange: Tracked<String>,
}

impl MxData {
    /// Create MX record data.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`](crate::dns_errors::DnsError::InvalidArgument)
    /// if `exchange` is blank.
    pub fn new(preference: u16, exchange: impl Into<String>) -> Result<Self> {
        let exchange = exchange.into();
        require_non_blank("mail_exchange", &exchange)?;
        Ok(Self {
            preference: Tracked::new(preference),
            exchange: Tracked::new(exchange),
        })
    }

    /// Preference; lower values are tried first.
    #[must_use]
    pub fn preference(&self) -> u16 {
        *self.preference.get()
    }

    /// Change the preference.
    pub fn set_preference(&mut self, preference: u16) {
        self.preference.set(preference);
    }

    /// The mail exchanger host.
    #[must_use]
    pub fn exchange(&self) -> &str {
        self.exchange.get()
    }

    /// Change the mail exchanger host.
    ///
    /// # Errors
    ///
    /// Returns an error if `exchange` is blank.
    pub fn set_exchange(&mut self, exchange: impl Into<String>) -> Result<()> {
        let exchange = exchange.into();
        require_non_blank("mail_exchange", &exchange)?;
        self.exchange.set(exchange);
        Ok(())
    }
}

impl RecordKind for MxData {
    fn has_changes(&self) -> bool {
        self.preference.is_dirty() || self.exchange.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.preference.mark_saved();
        self.exchange.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("[{}] {}", self.preference(), self.exchange())
    }
}

/// RT record data: an intermediate host for routing to the owner (RFC 1183).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtData {
    preference: Tracked<u16>,
    intermediate_host: Tracked<String>,
}

impl RtData {
    /// Create RT record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `intermediate_host` is blank.
    pub fn new(preference: u16, intermediate_host: impl Into<String>) -> Result<Self> {
        let intermediate_host = intermediate_host.into();
        require_non_blank("intermediate_host", &intermediate_host)?;
        Ok(Self {
            preference: Tracked::new(preference),
            intermediate_host: Tracked::new(intermediate_host),
        })
    }

    /// Preference; lower values are tried first.
    #[must_use]
    pub fn preference(&self) -> u16 {
        *self.preference.get()
    }

    /// Change the preference.
    pub fn set_preference(&mut self, preference: u16) {
        self.preference.set(preference);
    }

    /// The intermediate host.
    #[must_use]
    pub fn intermediate_host(&self) -> &str {
        self.intermediate_host.get()
    }

    /// Change the intermediate host.
    ///
    /// # Errors
    ///
    /// Returns an error if `intermediate_host` is blank.
    pub fn set_intermediate_host(&mut self, intermediate_host: impl Into<String>) -> Result<()> {
        let intermediate_host = intermediate_host.into();
        require_non_blank("intermediate_host", &intermediate_host)?;
        self.intermediate_host.set(intermediate_host);
        Ok(())
    }
}

impl RecordKind for RtData {
    fn has_changes(&self) -> bool {
        self.preference.is_dirty() || self.intermediate_host.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.preference.mark_saved();
        self.intermediate_host.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("[{}] {}", self.preference(), self.intermediate_host())
    }
}

/// AFSDB record data: an AFS cell database server (RFC 1183).
///
/// Subtype 1 is an AFS version 3 volume location server, subtype 2 a DCE
/// authenticated name server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AfsdbData {
    subtype: Tracked<u16>,
    server: Tracked<String>,
}

impl AfsdbData {
    /// Create AFSDB record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `server` is blank.
    pub fn new(subtype: u16, server: impl Into<String>) -> Result<Self> {
        let server = server.into();
        require_non_blank("server_name", &server)?;
        Ok(Self {
            subtype: Tracked::new(subtype),
            server: Tracked::new(server),
        })
    }

    /// The server subtype.
    #[must_use]
    pub fn subtype(&self) -> u16 {
        *self.subtype.get()
    }

    /// Change the server subtype.
    pub fn set_subtype(&mut self, subtype: u16) {
        self.subtype.set(subtype);
    }

    /// The database server host.
    #[must_use]
    pub fn server(&self) -> &str {
        self.server.get()
    }

    /// Change the database server host.
    ///
    /// # Errors
    ///
    /// Returns an error if `server` is blank.
    pub fn set_server(&mut self, server: impl Into<String>) -> Result<()> {
        let server = server.into();
        require_non_blank("server_name", &server)?;
        self.server.set(server);
        Ok(())
    }
}

impl RecordKind for AfsdbData {
    fn has_changes(&self) -> bool {
        self.subtype.is_dirty() || self.server.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.subtype.mark_saved();
        self.server.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("[{}] {}", self.subtype(), self.server())
    }
}

/// MINFO record data: mailboxes responsible for a mailing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinfoData {
    responsible_mailbox: Tracked<String>,
    error_mailbox: Tracked<String>,
}

impl MinfoData {
    /// Create MINFO record data.
    ///
    /// # Errors
    ///
    /// Returns an error if either mailbox is blank.
    pub fn new(
        responsible_mailbox: impl Into<String>,
        error_mailbox: impl Into<String>,
    ) -> Result<Self> {
        let responsible_mailbox = responsible_mailbox.into();
        let error_mailbox = error_mailbox.into();
        require_non_blank("responsible_mailbox", &responsible_mailbox)?;
        require_non_blank("error_mailbox", &error_mailbox)?;
        Ok(Self {
            responsible_mailbox: Tracked::new(responsible_mailbox),
            error_mailbox: Tracked::new(error_mailbox),
        })
    }

    /// Mailbox responsible for the list.
    #[must_use]
    pub fn responsible_mailbox(&self) -> &str {
        self.responsible_mailbox.get()
    }

    /// Change the responsible mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if `mailbox` is blank.
    pub fn set_responsible_mailbox(&mut self, mailbox: impl Into<String>) -> Result<()> {
        let mailbox = mailbox.into();
        require_non_blank("responsible_mailbox", &mailbox)?;
        self.responsible_mailbox.set(mailbox);
        Ok(())
    }

    /// Mailbox receiving error messages for the list.
    #[must_use]
    pub fn error_mailbox(&self) -> &str {
        self.error_mailbox.get()
    }

    /// Change the error mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if `mailbox` is blank.
    pub fn set_error_mailbox(&mut self, mailbox: impl Into<String>) -> Result<()> {
        let mailbox = mailbox.into();
        require_non_blank("error_mailbox", &mailbox)?;
        self.error_mailbox.set(mailbox);
        Ok(())
    }
}

impl RecordKind for MinfoData {
    fn has_changes(&self) -> bool {
        self.responsible_mailbox.is_dirty() || self.error_mailbox.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.responsible_mailbox.mark_saved();
        self.error_mailbox.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("{}, {}", self.responsible_mailbox(), self.error_mailbox())
    }
}

/// RP record data: the responsible person for the owner (RFC 1183).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpData {
    mailbox: Tracked<String>,
    txt_domain: Tracked<String>,
}

impl RpData {
    /// Create RP record data.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is blank.
    pub fn new(mailbox: impl Into<String>, txt_domain: impl Into<String>) -> Result<Self> {
        let mailbox = mailbox.into();
        let txt_domain = txt_domain.into();
        require_non_blank("rp_mailbox", &mailbox)?;
        require_non_blank("txt_domain_name", &txt_domain)?;
        Ok(Self {
            mailbox: Tracked::new(mailbox),
            txt_domain: Tracked::new(txt_domain),
        })
    }

    /// Mailbox of the responsible person.
    #[must_use]
    pub fn mailbox(&self) -> &str {
        self.mailbox.get()
    }

    /// Change the responsible person's mailbox.
    ///
    /// # Errors
    ///
    /// Returns an error if `mailbox` is blank.
    pub fn set_mailbox(&mut self, mailbox: impl Into<String>) -> Result<()> {
        let mailbox = mailbox.into();
        require_non_blank("rp_mailbox", &mailbox)?;
        self.mailbox.set(mailbox);
        Ok(())
    }

    /// Domain name holding TXT records about the responsible person.
    #[must_use]
    pub fn txt_domain(&self) -> &str {
        self.txt_domain.get()
    }

    /// Change the TXT domain name.
    ///
    /// # Errors
    ///
    /// Returns an error if `txt_domain` is blank.
    pub fn set_txt_domain(&mut self, txt_domain: impl Into<String>) -> Result<()> {
        let txt_domain = txt_domain.into();
        require_non_blank("txt_domain_name", &txt_domain)?;
        self.txt_domain.set(txt_domain);
        Ok(())
    }
}

impl RecordKind for RpData {
    fn has_changes(&self) -> bool {
        self.mailbox.is_dirty() || self.txt_domain.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.mailbox.mark_saved();
        self.txt_domain.mark_saved();
    }

    fn data_text(&self) -> String {
        format!("{}, {}", self.mailbox(), self.txt_domain())
    }
}

#[cfg(test)]
#[path = "mail_tests.rs"]
mod mail_tests;
