// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNSSEC-era security records from RFC 2535: KEY, SIG and NXT.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use std::time::Duration;

use super::{RecordKind, RecordType, Tracked};
use crate::dns_errors::{require_non_blank, Result};

/// KEY record data: a public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyData {
    flags: Tracked<u16>,
    protocol: Tracked<u8>,
    algorithm: Tracked<u8>,
    public_key: Tracked<Vec<u8>>,
}

impl KeyData {
    /// Create KEY record data.
    #[must_use]
    pub fn new(flags: u16, protocol: u8, algorithm: u8, public_key: Vec<u8>) -> Self {
        Self {
            flags: Tracked::new(flags),
            protocol: Tracked::new(protocol),
            algorithm: Tracked::new(algorithm),
            public_key: Tracked::new(public_key),
        }
    }

    /// Key flags.
    #[must_use]
    pub fn flags(&self) -> u16 {
        *self.flags.get()
    }

    /// Change the key flags.
    pub fn set_flags(&mut self, flags: u16) {
        self.flags.set(flags);
    }

    /// Protocol the key is used with.
    #[must_use]
    pub fn protocol(&self) -> u8 {
        *self.protocol.get()
    }

    /// Change the protocol.
    pub fn set_protocol(&mut self, protocol: u8) {
        self.protocol.set(protocol);
    }

    /// Key algorithm number.
    #[must_use]
    pub fn algorithm(&self) -> u8 {
        *self.algorithm.get()
    }

    /// Change the key algorithm.
    pub fn set_algorithm(&mut self, algorithm: u8) {
        self.algorithm.set(algorithm);
    }

    /// Raw public key bytes.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        self.public_key.get()
    }

    /// Replace the public key bytes.
    pub fn set_public_key(&mut self, public_key: Vec<u8>) {
        self.public_key.set(public_key);
    }

    /// Public key in base64.
    #[must_use]
    pub fn public_key_base64(&self) -> String {
        BASE64.encode(self.public_key())
    }
}

impl RecordKind for KeyData {
    fn has_changes(&self) -> bool {
        self.flags.is_dirty()
            || self.protocol.is_dirty()
            || self.algorithm.is_dirty()
            || self.public_key.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.flags.mark_saved();
        self.protocol.mark_saved();
        self.algorithm.mark_saved();
        self.public_key.mark_saved();
    }

    fn data_text(&self) -> String {
        format!(
            "[{}][{}][{}] {}",
            self.flags(),
            self.protocol(),
            self.algorithm(),
            self.public_key_base64()
        )
    }
}

/// SIG record data: a signature over an RRset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigData {
    type_covered: Tracked<RecordType>,
    algorithm: Tracked<u8>,
    labels: Tracked<u8>,
    original_ttl: Tracked<Duration>,
    expiration: Tracked<DateTime<Utc>>,
    inception: Tracked<DateTime<Utc>>,
    key_tag: Tracked<u16>,
    signer: Tracked<String>,
    signature: Tracked<Vec<u8>>,
}

impl SigData {
    /// Create SIG record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `signer` is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        type_covered: RecordType,
        algorithm: u8,
        labels: u8,
        original_ttl: Duration,
        expiration: DateTime<Utc>,
        inception: DateTime<Utc>,
        key_tag: u16,
        signer: impl Into<String>,
        signature: Vec<u8>,
    ) -> Result<Self> {
        let signer = signer.into();
        require_non_blank("signer_name", &signer)?;
        Ok(Self {
            type_covered: Tracked::new(type_covered),
            algorithm: Tracked::new(algorithm),
            labels: Tracked::new(labels),
            original_ttl: Tracked::new(original_ttl),
            expiration: Tracked::new(expiration),
            inception: Tracked::new(inception),
            key_tag: Tracked::new(key_tag),
            signer: Tracked::new(signer),
            signature: Tracked::new(signature),
        })
    }

    /// Type of the RRset the signature covers.
    #[must_use]
    pub fn type_covered(&self) -> RecordType {
        *self.type_covered.get()
    }

    /// Change the covered type.
    pub fn set_type_covered(&mut self, type_covered: RecordType) {
        self.type_covered.set(type_covered);
    }

    /// Signature algorithm number.
    #[must_use]
    pub fn algorithm(&self) -> u8 {
        *self.algorithm.get()
    }

    /// Change the signature algorithm.
    pub fn set_algorithm(&mut self, algorithm: u8) {
        self.algorithm.set(algorithm);
    }

    /// Label count of the signed owner name.
    #[must_use]
    pub fn labels(&self) -> u8 {
        *self.labels.get()
    }

    /// Change the label count.
    pub fn set_labels(&mut self, labels: u8) {
        self.labels.set(labels);
    }

    /// TTL of the covered RRset when it was signed.
    #[must_use]
    pub fn original_ttl(&self) -> Duration {
        *self.original_ttl.get()
    }

    /// Change the original TTL.
    pub fn set_original_ttl(&mut self, original_ttl: Duration) {
        self.original_ttl.set(original_ttl);
    }

    /// End of the validity period.
    #[must_use]
    pub fn expiration(&self) -> DateTime<Utc> {
        *self.expiration.get()
    }

    /// Change the end of the validity period.
    pub fn set_expiration(&mut self, expiration: DateTime<Utc>) {
        self.expiration.set(expiration);
    }

    /// Start of the validity period.
    #[must_use]
    pub fn inception(&self) -> DateTime<Utc> {
        *self.inception.get()
    }

    /// Change the start of the validity period.
    pub fn set_inception(&mut self, inception: DateTime<Utc>) {
        self.inception.set(inception);
    }

    /// Tag of the signing key.
    #[must_use]
    pub fn key_tag(&self) -> u16 {
        *self.key_tag.get()
    }

    /// Change the key tag.
    pub fn set_key_tag(&mut self, key_tag: u16) {
        self.key_tag.set(key_tag);
    }

    /// Name of the signer.
    #[must_use]
    pub fn signer(&self) -> &str {
        self.signer.get()
    }

    /// Change the signer name.
    ///
    /// # Errors
    ///
    /// Returns an error if `signer` is blank.
    pub fn set_signer(&mut self, signer: impl Into<String>) -> Result<()> {
        let signer = signer.into();
        require_non_blank("signer_name", &signer)?;
        self.signer.set(signer);
        Ok(())
    }

    /// Raw signature bytes.
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        self.signature.get()
    }

    /// Replace the signature bytes.
    pub fn set_signature(&mut self, signature: Vec<u8>) {
        self.signature.set(signature);
    }

    /// Signature in base64.
    #[must_use]
    pub fn signature_base64(&self) -> String {
        BASE64.encode(self.signature())
    }
}

impl RecordKind for SigData {
    fn has_changes(&self) -> bool {
        self.type_covered.is_dirty()
            || self.algorithm.is_dirty()
            || self.labels.is_dirty()
            || self.original_ttl.is_dirty()
            || self.expiration.is_dirty()
            || self.inception.is_dirty()
            || self.key_tag.is_dirty()
            || self.signer.is_dirty()
            || self.signature.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.type_covered.mark_saved();
        self.algorithm.mark_saved();
        self.labels.mark_saved();
        self.original_ttl.mark_saved();
        self.expiration.mark_saved();
        self.inception.mark_saved();
        self.key_tag.mark_saved();
        self.signer.mark_saved();
        self.signature.mark_saved();
    }

    fn data_text(&self) -> String {
        format!(
            "[{}][{}][{}][{}] {} ({})",
            self.type_covered(),
            self.algorithm(),
            self.labels(),
            self.original_ttl().as_secs(),
            self.signer(),
            self.key_tag()
        )
    }
}

/// NXT record data: the next name in the zone and the types present at the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NxtData {
    next_domain: Tracked<String>,
    types: Tracked<Vec<RecordType>>,
}

impl NxtData {
    /// Create NXT record data.
    ///
    /// # Errors
    ///
    /// Returns an error if `next_domain` is blank.
    pub fn new(next_domain: impl Into<String>, types: Vec<RecordType>) -> Result<Self> {
        let next_domain = next_domain.into();
        require_non_blank("next_domain_name", &next_domain)?;
        Ok(Self {
            next_domain: Tracked::new(next_domain),
            types: Tracked::new(types),
        })
    }

    /// The next owner name in canonical zone order.
    #[must_use]
    pub fn next_domain(&self) -> &str {
        self.next_domain.get()
    }

    /// Change the next owner name.
    ///
    /// # Errors
    ///
    /// Returns an error if `next_domain` is blank.
    pub fn set_next_domain(&mut self, next_domain: impl Into<String>) -> Result<()> {
        let next_domain = next_domain.into();
        require_non_blank("next_domain_name", &next_domain)?;
        self.next_domain.set(next_domain);
        Ok(())
    }

    /// Record types present at the owner name.
    #[must_use]
    pub fn types(&self) -> &[RecordType] {
        self.types.get()
    }

    /// Replace the record types present at the owner name.
    pub fn set_types(&mut self, types: Vec<RecordType>) {
        self.types.set(types);
    }
}

impl RecordKind for NxtData {
    fn has_changes(&self) -> bool {
        self.next_domain.is_dirty() || self.types.is_dirty()
    }

    fn mark_saved(&mut self) {
        self.next_domain.mark_saved();
        self.types.mark_saved();
    }

    fn data_text(&self) -> String {
        let types: Vec<&str> = self.types().iter().map(RecordType::as_str).collect();
        format!("{} [{}]", self.next_domain(), types.join(" "))
    }
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod security_tests;
