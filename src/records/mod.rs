// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Typed DNS resource records with change tracking.
//!
//! A [`Record`] carries the fields every resource record shares (owner name,
//! class, TTL) plus a [`RecordData`] value holding the type-specific fields.
//! Every mutable field remembers its last-persisted value, so
//! [`Record::has_changes`] can tell a backend whether a write is needed.
//!
//! Records optionally hold a weak link to the zone that owns them. Attached
//! records can persist themselves with [`Record::save`] and remove themselves
//! with [`Record::delete`]; unattached records are templates for
//! [`Zone::create_record`](crate::zone::Zone::create_record).
//!
//! # Example
//!
//! ```
//! use std::net::Ipv4Addr;
//! use std::time::Duration;
//! use zonekeeper::records::{AData, Record};
//!
//! let mut record = Record::new(
//!     "www.example.com",
//!     Duration::from_secs(3600),
//!     AData::new(Ipv4Addr::new(192, 0, 2, 1)),
//! )
//! .unwrap();
//! assert!(!record.has_changes());
//!
//! if let Some(a) = record.data_mut::<AData>() {
//!     a.set_address(Ipv4Addr::new(192, 0, 2, 2));
//! }
//! assert!(record.has_changes());
//! assert_eq!(record.to_string(), "A Record [www.example.com = 192.0.2.2]*");
//! ```

pub mod host;
pub mod mail;
pub mod names;
pub mod security;
pub mod soa;
pub mod srv;
pub mod text;
pub mod tracked;
pub mod types;
pub mod wins;

pub use host::{AData, AaaaData, AtmaData, AtmaFormat, WksData, WksProtocol};
pub use mail::{AfsdbData, MinfoData, MxData, RpData, RtData};
pub use names::{CnameData, MbData, MdData, MfData, MgData, MrData, NsData, PtrData};
pub use security::{KeyData, NxtData, SigData};
pub use soa::SoaData;
pub use srv::SrvData;
pub use text::{HinfoData, IsdnData, TxtData, X25Data};
pub use tracked::Tracked;
pub use types::{RecordClass, RecordType};
pub use wins::{WinsData, WinsrData};

use std::fmt;
use std::net::Ipv4Addr;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::address::{ipv4_from_network, ptr_name_to_address};
use crate::dns_errors::{require_non_blank, DnsError, Result};
use crate::zone::{Zone, ZoneLink};

/// Capabilities every variant's data implements.
pub trait RecordKind {
    /// Whether any variant field differs from its last-persisted value.
    fn has_changes(&self) -> bool;

    /// Reset every variant field's shadow to its live value.
    fn mark_saved(&mut self);

    /// Canonical rendering of the variant's data fields.
    fn data_text(&self) -> String;

    /// Check constraints the variant places on the owner name.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner name does not fit the variant.
    fn validate_owner(&self, _name: &str) -> Result<()> {
        Ok(())
    }
}

/// A data type that is exactly one variant of [`RecordData`].
pub trait VariantData: RecordKind + Into<RecordData> {
    /// Borrow this variant out of `data`, if `data` holds it.
    fn from_data(data: &RecordData) -> Option<&Self>;

    /// Mutably borrow this variant out of `data`, if `data` holds it.
    fn from_data_mut(data: &mut RecordData) -> Option<&mut Self>;
}

/// Generates [`RecordData`] and its per-variant dispatch.
///
/// Each variant name must match the [`RecordType`] variant it represents.
macro_rules! record_data {
    ($($variant:ident => $data:ident),+ $(,)?) => {
        /// Type-specific record data, one variant per [`RecordType`].
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RecordData {
            $(
                #[doc = concat!("Data of a ", stringify!($variant), " record")]
                $variant($data),
            )+
        }

        impl RecordData {
            /// The record type this data belongs to.
            #[must_use]
            pub fn record_type(&self) -> RecordType {
                match self {
                    $(Self::$variant(_) => RecordType::$variant,)+
                }
            }

            fn kind(&self) -> &dyn RecordKind {
                match self {
                    $(Self::$variant(data) => data,)+
                }
            }

            fn kind_mut(&mut self) -> &mut dyn RecordKind {
                match self {
                    $(Self::$variant(data) => data,)+
                }
            }
        }

        $(
            impl From<$data> for RecordData {
                fn from(data: $data) -> Self {
                    Self::$variant(data)
                }
            }

            impl VariantData for $data {
                fn from_data(data: &RecordData) -> Option<&Self> {
                    match data {
                        RecordData::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_data_mut(data: &mut RecordData) -> Option<&mut Self> {
                    match data {
                        RecordData::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

record_data! {
    A => AData,
    AAAA => AaaaData,
    AFSDB => AfsdbData,
    ATMA => AtmaData,
    CNAME => CnameData,
    HINFO => HinfoData,
    ISDN => IsdnData,
    KEY => KeyData,
    MB => MbData,
    MD => MdData,
    MF => MfData,
    MG => MgData,
    MINFO => MinfoData,
    MR => MrData,
    MX => MxData,
    NS => NsData,
    NXT => NxtData,
    PTR => PtrData,
    RP => RpData,
    RT => RtData,
    SIG => SigData,
    SOA => SoaData,
    SRV => SrvData,
    TXT => TxtData,
    WINS => WinsData,
    WINSR => WinsrData,
    WKS => WksData,
    X25 => X25Data,
}

impl RecordData {
    /// Whether any variant field differs from its last-persisted value.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.kind().has_changes()
    }

    /// Reset every variant field's shadow to its live value.
    pub fn mark_saved(&mut self) {
        self.kind_mut().mark_saved();
    }

    /// Canonical rendering of the variant's data fields.
    #[must_use]
    pub fn data_text(&self) -> String {
        self.kind().data_text()
    }

    fn validate_owner(&self, name: &str) -> Result<()> {
        self.kind().validate_owner(name)
    }
}

/// Opaque per-record handle a backend uses to re-locate a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderToken(String);

impl ProviderToken {
    /// Wrap a backend-specific identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The backend-specific identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A DNS resource record.
///
/// `Clone` copies the record verbatim, including dirty state and zone link.
/// Backends use [`Record::clone_for`] to produce a clean copy bound to a zone.
#[derive(Debug, Clone)]
pub struct Record {
    zone: Option<ZoneLink>,
    token: Option<ProviderToken>,
    name: String,
    class: RecordClass,
    ttl: Tracked<Duration>,
    data: RecordData,
    saved_data: RecordData,
}

impl Record {
    /// Create an unattached Internet-class record.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidArgument`] if `name` is blank, or
    /// [`DnsError::InvalidFormat`] if the owner name does not fit the record
    /// type (SRV).
    pub fn new(name: impl Into<String>, ttl: Duration, data: impl Into<RecordData>) -> Result<Self> {
        Self::from_provider(None, None, name, RecordClass::IN, ttl, data)
    }

    /// Create an unattached record with an explicit class.
    ///
    /// # Errors
    ///
    /// See [`Record::new`].
    pub fn with_class(
        name: impl Into<String>,
        class: RecordClass,
        ttl: Duration,
        data: impl Into<RecordData>,
    ) -> Result<Self> {
        Self::from_provider(None, None, name, class, ttl, data)
    }

    /// Create a record bound to a zone and backend token.
    ///
    /// This is the canonical constructor; backends use it when materializing
    /// records they read from storage.
    ///
    /// # Errors
    ///
    /// See [`Record::new`].
    pub fn from_provider(
        zone: Option<ZoneLink>,
        token: Option<ProviderToken>,
        name: impl Into<String>,
        class: RecordClass,
        ttl: Duration,
        data: impl Into<RecordData>,
    ) -> Result<Self> {
        let name = name.into();
        let data = data.into();
        require_non_blank("name", &name)?;
        data.validate_owner(&name)?;

        Ok(Self {
            zone,
            token,
            name,
            class,
            ttl: Tracked::new(ttl),
            saved_data: data.clone(),
            data,
        })
    }

    /// The record type, fixed by the data variant.
    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }

    /// The owner name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record class.
    #[must_use]
    pub fn class(&self) -> RecordClass {
        self.class
    }

    /// The time-to-live.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        *self.ttl.get()
    }

    /// Change the time-to-live.
    pub fn set_ttl(&mut self, ttl: Duration) {
        self.ttl.set(ttl);
    }

    /// The type-specific data.
    #[must_use]
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// The type-specific data as `T`, if the record holds that type.
    #[must_use]
    pub fn data_as<T: VariantData>(&self) -> Option<&T> {
        T::from_data(&self.data)
    }

    /// Mutable access to the type-specific data as `T`.
    ///
    /// Returns `None` unless `T` is this record's data type. Only the inner
    /// data is handed out, so the record type stays fixed:
    ///
    /// ```compile_fail
    /// use std::time::Duration;
    /// use zonekeeper::records::{AData, MxData, Record, RecordData};
    ///
    /// let mut record =
    ///     Record::new("h.example.com", Duration::from_secs(60), AData::new([1, 2, 3, 4].into()))
    ///         .unwrap();
    /// *record.data_mut() = RecordData::MX(MxData::new(10, "mail.example.com").unwrap());
    /// ```
    pub fn data_mut<T: VariantData>(&mut self) -> Option<&mut T> {
        T::from_data_mut(&mut self.data)
    }

    /// Canonical rendering of the type-specific data.
    #[must_use]
    pub fn data_text(&self) -> String {
        self.data.data_text()
    }

    /// Whether the record differs from its last-persisted state.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.ttl.is_dirty() || self.data.has_changes() || self.data != self.saved_data
    }

    /// Mark the current values as persisted.
    ///
    /// Backends call this after a successful write.
    pub fn provider_saved(&mut self) {
        self.ttl.mark_saved();
        self.data.mark_saved();
        self.saved_data = self.data.clone();
    }

    /// Copy this record for a (possibly different) zone and backend token.
    ///
    /// The copy's values become its persisted state, so it reports no changes
    /// whatever the state of `self`.
    #[must_use]
    pub fn clone_for(&self, zone: Option<ZoneLink>, token: Option<ProviderToken>) -> Self {
        let mut data = self.data.clone();
        data.mark_saved();

        Self {
            zone,
            token,
            name: self.name.clone(),
            class: self.class,
            ttl: Tracked::new(self.ttl()),
            saved_data: data.clone(),
            data,
        }
    }

    /// Copy this record as an unattached template.
    #[must_use]
    pub fn clone_unattached(&self) -> Self {
        self.clone_for(None, None)
    }

    /// The backend token, if a backend has assigned one.
    #[must_use]
    pub fn provider_token(&self) -> Option<&ProviderToken> {
        self.token.as_ref()
    }

    /// Replace the backend token.
    pub fn set_provider_token(&mut self, token: Option<ProviderToken>) {
        self.token = token;
    }

    /// The weak link to the owning zone, if any.
    #[must_use]
    pub fn zone_link(&self) -> Option<&ZoneLink> {
        self.zone.as_ref()
    }

    /// The owning zone, if the record is attached and the zone is alive.
    #[must_use]
    pub fn zone(&self) -> Option<Rc<dyn Zone>> {
        self.zone.as_ref().and_then(Weak::upgrade)
    }

    /// Whether this record is linked to exactly `zone`.
    #[must_use]
    pub fn is_linked_to(&self, zone: &dyn Zone) -> bool {
        self.zone()
            .is_some_and(|linked| std::ptr::addr_eq(Rc::as_ptr(&linked), zone))
    }

    /// Persist this record through its owning zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidOperation`] if the record is not attached to
    /// a live zone, or whatever the zone's save reports.
    pub fn save(&mut self) -> Result<()> {
        let zone = self.owning_zone()?;
        zone.save_record(self)
    }

    /// Delete this record through its owning zone.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidOperation`] if the record is not attached to
    /// a live zone, or whatever the zone's delete reports.
    pub fn delete(&self) -> Result<()> {
        let zone = self.owning_zone()?;
        zone.delete_record(self)
    }

    fn owning_zone(&self) -> Result<Rc<dyn Zone>> {
        self.zone().ok_or_else(|| {
            DnsError::invalid_operation(format!(
                "{} record '{}' is not attached to a zone",
                self.record_type(),
                self.name
            ))
        })
    }

    /// SRV service label, parsed from the first label of the owner name.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        match self.data {
            RecordData::SRV(_) => self.name.split('.').next(),
            _ => None,
        }
    }

    /// SRV protocol label, parsed from the second label of the owner name.
    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        match self.data {
            RecordData::SRV(_) => self.name.split('.').nth(1),
            _ => None,
        }
    }

    /// PTR address, recovered from the reverse-lookup owner name.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::InvalidOperation`] for non-PTR records and
    /// [`DnsError::InvalidArgument`] if the owner name is not a reverse name.
    pub fn ptr_address(&self) -> Result<Ipv4Addr> {
        match self.data {
            RecordData::PTR(_) => ptr_name_to_address(&self.name).map(ipv4_from_network),
            _ => Err(DnsError::invalid_operation(format!(
                "{} record '{}' has no reverse-mapped address",
                self.record_type(),
                self.name
            ))),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Record [{} = {}]",
            self.record_type(),
            self.name,
            self.data_text()
        )?;
        if self.has_changes() {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
