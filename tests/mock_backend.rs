// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end tests against the in-memory backend.
//!
//! Run with: cargo test --test mock_backend

mod common;

use common::{a_record, init_tracing, srv_record};
use std::net::Ipv4Addr;
use std::time::Duration;
use zonekeeper::mock::MockServer;
use zonekeeper::records::{AData, RecordType, SoaData};
use zonekeeper::{ProviderConfig, Server};

const ZONE: &str = "myzone.mock";
const HOST: &str = "myhost.myzone.mock";

// ============================================================================
// Record Lifecycle
// ============================================================================

#[test]
fn test_zone_and_record_lifecycle() {
    init_tracing();
    let server = MockServer::new("mockserver.local");

    let zone = server.create_zone_named(ZONE).unwrap();
    let template = a_record(
        HOST,
        Ipv4Addr::new(192, 168, 1, 50),
        Duration::from_secs(3600),
    );
    zone.create_record(&template).unwrap();

    let found = zone.records_of_type_named(RecordType::A, HOST).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].data_text(), "192.168.1.50");
    assert_eq!(found[0].ttl(), Duration::from_secs(3600));
    assert!(found[0].is_linked_to(zone.as_ref()));

    found[0].delete().unwrap();
    assert!(zone
        .records_of_type_named(RecordType::A, HOST)
        .unwrap()
        .is_empty());

    server.delete_zone_named(ZONE).unwrap();
    assert!(server.zone(ZONE).unwrap_err().is_invalid_argument());
}

#[test]
fn test_edit_and_save_record() {
    init_tracing();
    let server = MockServer::new("mockserver.local");
    let zone = server.create_zone_named(ZONE).unwrap();
    let mut record = zone
        .create_record(&a_record(
            HOST,
            Ipv4Addr::new(192, 168, 1, 50),
            Duration::from_secs(3600),
        ))
        .unwrap();

    if let Some(a) = record.data_mut::<AData>() {
        a.set_address(Ipv4Addr::new(192, 168, 1, 60));
    }
    record.set_ttl(Duration::from_secs(300));
    assert!(record.has_changes());
    record.save().unwrap();
    assert!(!record.has_changes());

    let reread = zone.records_of_type_named(RecordType::A, HOST).unwrap();
    assert_eq!(reread[0].data_text(), "192.168.1.60");
    assert_eq!(reread[0].ttl(), Duration::from_secs(300));
}

#[test]
fn test_soa_edit_persists() {
    init_tracing();
    let server = MockServer::new("mockserver.local");
    let zone = server.create_zone_named(ZONE).unwrap();

    let mut soa = zone.start_of_authority().unwrap();
    let data = soa.data_mut::<SoaData>().unwrap();
    data.increment_serial();
    let serial = data.serial();
    soa.save().unwrap();

    let reread = zone.start_of_authority().unwrap();
    assert_eq!(reread.data_as::<SoaData>().unwrap().serial(), serial);
}

// ============================================================================
// Zone Rules
// ============================================================================

#[test]
fn test_duplicate_zone_rejected_ignoring_case() {
    init_tracing();
    let server = MockServer::new("mockserver.local");
    server.create_zone_named(ZONE).unwrap();

    let error = server.create_zone_named("MyZone.MOCK").unwrap_err();

    assert!(error.is_invalid_argument());
    assert_eq!(server.zones().unwrap().len(), 1);
}

#[test]
fn test_new_zone_is_seeded() {
    init_tracing();
    let config = ProviderConfig::for_server("ns1.mock");
    let server = MockServer::with_config(&config);

    let zone = server.create_zone_named(ZONE).unwrap();

    assert_eq!(zone.records().unwrap().len(), 2);
    let name_servers = zone.name_servers().unwrap();
    assert_eq!(name_servers[0].data_text(), "ns1.mock");
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_finds_srv_by_service() {
    init_tracing();
    let server = MockServer::new("mockserver.local");
    let zone = server.create_zone_named(ZONE).unwrap();
    zone.create_record(&srv_record("_ldap._tcp.myzone.mock", 389, "dc1.myzone.mock"))
        .unwrap();
    zone.create_record(&a_record(
        HOST,
        Ipv4Addr::new(192, 168, 1, 50),
        Duration::from_secs(3600),
    ))
    .unwrap();

    let found = zone.search_records("ldap").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record_type(), RecordType::SRV);
    assert_eq!(found[0].service(), Some("_ldap"));
    assert_eq!(found[0].protocol(), Some("_tcp"));

    assert!(zone.search_records("kerberos").unwrap().is_empty());
}

// ============================================================================
// Shutdown
// ============================================================================

#[test]
fn test_close_detaches_records() {
    init_tracing();
    let server = MockServer::new("mockserver.local");
    let zone = server.create_zone_named(ZONE).unwrap();
    let mut record = zone
        .create_record(&a_record(
            HOST,
            Ipv4Addr::new(192, 168, 1, 50),
            Duration::from_secs(3600),
        ))
        .unwrap();

    server.close();

    record.set_ttl(Duration::from_secs(5));
    assert!(record.save().unwrap_err().is_invalid_operation());
    assert!(server.zones().unwrap().is_empty());
}
