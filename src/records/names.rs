// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Records whose data is a single domain name.
//!
//! CNAME, NS, PTR and the RFC 1035 mailbox records MB, MD, MF, MG and MR all
//! carry exactly one required name, so their data types are generated by
//! [`name_record!`].

use super::{RecordKind, Tracked};
use crate::dns_errors::{require_non_blank, Result};

/// Generate a data type holding one required, dirty-tracked domain name.
macro_rules! name_record {
    (
        $(#[$meta:meta])*
        $data:ident, $field:ident, $setter:ident, $param:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $data {
            $field: Tracked<String>,
        }

        impl $data {
            #[doc = concat!("Create the record data from its `", $param, "`.")]
            ///
            /// # Errors
            ///
            /// Returns [`DnsError::InvalidArgument`](crate::dns_errors::DnsError::InvalidArgument)
            /// if the name is blank.
            pub fn new($field: impl Into<String>) -> Result<Self> {
                let $field = $field.into();
                require_non_blank($param, &$field)?;
                Ok(Self {
                    $field: Tracked::new($field),
                })
            }

            #[doc = concat!("The `", $param, "`.")]
            #[must_use]
            pub fn $field(&self) -> &str {
                self.$field.get()
            }

            #[doc = concat!("Change the `", $param, "`.")]
            ///
            /// # Errors
            ///
            /// Returns [`DnsError::InvalidArgument`](crate::dns_errors::DnsError::InvalidArgument)
            /// if the name is blank.
            pub fn $setter(&mut self, $field: impl Into<String>) -> Result<()> {
                let $field = $field.into();
                require_non_blank($param, &$field)?;
                self.$field.set($field);
                Ok(())
            }
        }

        impl RecordKind for $data {
            fn has_changes(&self) -> bool {
                self.$field.is_dirty()
            }

            fn mark_saved(&mut self) {
                self.$field.mark_saved();
            }

            fn data_text(&self) -> String {
                self.$field.get().clone()
            }
        }
    };
}

name_record! {
    /// CNAME record data: the canonical name the owner is an alias for.
    CnameData, primary_name, set_primary_name, "primary_name"
}

name_record! {
    /// NS record data: an authoritative name server for the owner.
    NsData, name_server, set_name_server, "name_server"
}

name_record! {
    /// PTR record data: the domain name a reverse-lookup name points to.
    ///
    /// The address being mapped is derived from the owner name, see
    /// [`Record::ptr_address`](super::Record::ptr_address).
    PtrData, domain_name, set_domain_name, "domain_name"
}

name_record! {
    /// MB record data: host holding the owner's mailbox.
    MbData, host, set_host, "host"
}

name_record! {
    /// MD record data: host with a mail agent delivering for the owner.
    MdData, host, set_host, "host"
}

name_record! {
    /// MF record data: host with a mail agent forwarding for the owner.
    MfData, host, set_host, "host"
}

name_record! {
    /// MG record data: mailbox that is a member of the owner's mail group.
    MgData, mailbox, set_mailbox, "mailbox"
}

name_record! {
    /// MR record data: mailbox the owner's mailbox was renamed to.
    MrData, mailbox, set_mailbox, "mailbox"
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod names_tests;
