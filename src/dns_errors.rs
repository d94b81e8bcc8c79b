// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for zone and record operations.
//!
//! Every operation in this crate reports failure through [`DnsError`]. The
//! variants are kinds, not call sites:
//! - invalid arguments (blank names, malformed addresses, unknown zones or records)
//! - malformed owner names for formats with a fixed label layout (SRV)
//! - operations on detached records or zones
//! - operations or record types a backend does not implement
//! - failures reported by a backend's management connection

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DnsError>;

/// Coarse classification of a [`DnsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter was missing, blank, malformed or referred to something absent
    InvalidArgument,
    /// A name did not follow the label layout its record type requires
    InvalidFormat,
    /// The object is not attached to an owner that could carry out the operation
    InvalidOperation,
    /// The backend does not implement the operation or record type
    NotSupported,
    /// The backend's management connection failed
    Connection,
}

/// Errors returned by record, zone and server operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    /// Invalid argument
    ///
    /// Returned for blank required strings, malformed addresses, SOA creation
    /// attempts, lookups of zones or records that do not exist, duplicate zone
    /// names, and backend payloads that cannot be parsed.
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument {
        /// The parameter that was rejected
        param: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// Malformed owner name for a record type with a fixed label layout
    #[error("Invalid format for '{param}': {reason}")]
    InvalidFormat {
        /// The parameter that was rejected
        param: String,
        /// Explanation of what is invalid
        reason: String,
    },

    /// Save or delete invoked on a record or zone with no live owner
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Operation or record type not implemented by this backend
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Failure reported by a backend's management connection
    #[error("Management connection failed: {0}")]
    Connection(String),
}

impl DnsError {
    /// Build an [`DnsError::InvalidArgument`].
    pub fn invalid_argument(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`DnsError::InvalidFormat`].
    pub fn invalid_format(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`DnsError::InvalidOperation`].
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }

    /// Build an [`DnsError::NotSupported`].
    pub fn not_supported(reason: impl Into<String>) -> Self {
        Self::NotSupported(reason.into())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidOperation(_) => ErrorKind::InvalidOperation,
            Self::NotSupported(_) => ErrorKind::NotSupported,
            Self::Connection(_) => ErrorKind::Connection,
        }
    }

    /// Returns true if this is an invalid-argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Returns true if this is an invalid-operation error.
    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        self.kind() == ErrorKind::InvalidOperation
    }

    /// Returns true if this is a not-supported error.
    #[must_use]
    pub fn is_not_supported(&self) -> bool {
        self.kind() == ErrorKind::NotSupported
    }

    /// Returns a stable reason code for diagnostics.
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::InvalidFormat { .. } => "InvalidFormat",
            Self::InvalidOperation(_) => "InvalidOperation",
            Self::NotSupported(_) => "NotSupported",
            Self::Connection(_) => "ConnectionFailed",
        }
    }
}

/// Reject blank strings for a required parameter.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if `value` is empty or whitespace.
pub fn require_non_blank(param: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DnsError::invalid_argument(
            param,
            "value must not be empty or whitespace",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "dns_errors_tests.rs"]
mod dns_errors_tests;
