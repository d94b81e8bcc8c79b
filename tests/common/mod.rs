// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::json;
use std::net::Ipv4Addr;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use zonekeeper::records::{AData, Record, SrvData};
use zonekeeper::remote::{MemoryConnection, PropertySet};
use zonekeeper::zone::ZoneType;

static INIT: Once = Once::new();

/// Install a test log subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to debug output for this crate.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zonekeeper=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A record template for an A record.
pub fn a_record(name: &str, address: Ipv4Addr, ttl: Duration) -> Record {
    Record::new(name, ttl, AData::new(address)).expect("valid A record")
}

/// A record template for an SRV record.
pub fn srv_record(name: &str, port: u16, target: &str) -> Record {
    Record::new(
        name,
        Duration::from_secs(600),
        SrvData::new(0, 100, port, target).expect("valid SRV data"),
    )
    .expect("valid SRV record")
}

/// A management connection hosting one primary zone with its SOA and NS records.
pub fn seeded_connection(server: &str, zone: &str) -> Rc<MemoryConnection> {
    let connection = Rc::new(MemoryConnection::new(server));
    connection.add_zone(zone, ZoneType::Primary, false);
    insert_record(
        &connection,
        "MicrosoftDNS_SOAType",
        zone,
        zone,
        &format!("{server} hostmaster.{zone} 2025010101 900 600 86400 3600"),
    );
    insert_record(&connection, "MicrosoftDNS_NSType", zone, zone, server);
    connection
}

/// Store a raw record instance on a memory connection.
pub fn insert_record(
    connection: &MemoryConnection,
    class: &str,
    zone: &str,
    owner: &str,
    data: &str,
) -> String {
    let mut properties = PropertySet::new();
    properties.insert("ContainerName".to_string(), json!(zone));
    properties.insert("DomainName".to_string(), json!(zone));
    properties.insert("OwnerName".to_string(), json!(owner));
    properties.insert("TTL".to_string(), json!(3600));
    properties.insert("RecordClass".to_string(), json!(1));
    properties.insert("RecordData".to_string(), json!(data));
    connection.insert_instance(class, properties)
}
