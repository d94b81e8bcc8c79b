// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Zonekeeper - Typed DNS Zone and Record Model
//!
//! Zonekeeper models DNS servers, zones and resource records as strongly typed
//! values, and lets them be read and written through interchangeable storage
//! backends.
//!
//! ## Overview
//!
//! - Twenty-eight resource record types, each with dirty-tracked fields
//! - A [`Server`](server::Server) / [`Zone`](zone::Zone) contract every backend implements
//! - An in-memory backend for tests and tooling
//! - A backend speaking to a DNS management service through a
//!   [`ManagementConnection`](remote::ManagementConnection)
//! - IPv4 address and byte-order helpers for reverse-lookup names
//!
//! ## Modules
//!
//! - [`address`] - IPv4 parsing, formatting, reverse names and byte order
//! - [`config`] - Provider configuration loaded from YAML
//! - [`constants`] - Protocol defaults and management property names
//! - [`dns_errors`] - Error type shared by every operation
//! - [`records`] - Record types, record data and change tracking
//! - [`zone`] - Zone contract and zone descriptions
//! - [`server`] - Server contract
//! - [`mock`] - In-memory backend
//! - [`remote`] - Management-connection backend
//!
//! ## Example
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use std::time::Duration;
//! use zonekeeper::mock::MockServer;
//! use zonekeeper::records::{AData, Record, RecordType};
//! use zonekeeper::server::Server;
//!
//! let server = MockServer::new("dns1.example.com");
//! let zone = server.create_zone_named("example.com").unwrap();
//!
//! let template = Record::new(
//!     "www.example.com",
//!     Duration::from_secs(3600),
//!     AData::new(Ipv4Addr::new(192, 0, 2, 10)),
//! )
//! .unwrap();
//! zone.create_record(&template).unwrap();
//!
//! let found = zone
//!     .records_of_type_named(RecordType::A, "www.example.com")
//!     .unwrap();
//! assert_eq!(found[0].data_text(), "192.0.2.10");
//! ```
//!
//! Everything in the crate is single-threaded: servers, zones and records
//! share ownership through `Rc` and are neither `Send` nor `Sync`.

pub mod address;
pub mod config;
pub mod constants;
pub mod dns_errors;
pub mod mock;
pub mod records;
pub mod remote;
pub mod server;
pub mod zone;

pub use config::ProviderConfig;
pub use dns_errors::{DnsError, ErrorKind, Result};
pub use records::{ProviderToken, Record, RecordClass, RecordData, RecordType};
pub use server::Server;
pub use zone::{Zone, ZoneLink, ZoneTemplate, ZoneType};
