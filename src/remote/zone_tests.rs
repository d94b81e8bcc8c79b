// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for zones bound to a management connection.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::constants::{PROP_RECORD_DATA, PROP_TTL};
    use crate::records::{AData, MxData, RecordData, SrvData};
    use crate::remote::{MemoryConnection, PropertySet};
    use serde_json::json;
    use std::net::Ipv4Addr;
    use std::time::Duration;

    const SERVER: &str = "dns1.example.com";
    const ZONE: &str = "example.com";

    struct Fixture {
        connection: Rc<MemoryConnection>,
        server: Rc<RemoteServer>,
        zone: Rc<dyn Zone>,
    }

    fn setup() -> Fixture {
        let connection = Rc::new(MemoryConnection::new(SERVER));
        connection.add_zone(ZONE, ZoneType::Primary, false);
        seed(&connection, "MicrosoftDNS_SOAType", ZONE, &format!(
            "{SERVER} hostmaster.{ZONE} 2025010101 900 600 86400 3600"
        ));
        seed(&connection, "MicrosoftDNS_NSType", ZONE, SERVER);

        let server = RemoteServer::connect(
            Rc::clone(&connection) as Rc<dyn ManagementConnection>,
            ClassRegistry::standard(),
        )
        .unwrap();
        let zone = server.zone(ZONE).unwrap();
        Fixture {
            connection,
            server,
            zone,
        }
    }

    fn seed(connection: &MemoryConnection, class: &str, owner: &str, data: &str) -> String {
        let mut properties = PropertySet::new();
        properties.insert(PROP_CONTAINER_NAME.to_string(), json!(ZONE));
        properties.insert(PROP_OWNER_NAME.to_string(), json!(owner));
        properties.insert(PROP_TTL.to_string(), json!(3600));
        properties.insert(PROP_RECORD_DATA.to_string(), json!(data));
        connection.insert_instance(class, properties)
    }

    fn a_template(name: &str, last_octet: u8) -> Record {
        Record::new(
            name,
            Duration::from_secs(3600),
            AData::new(Ipv4Addr::new(192, 168, 1, last_octet)),
        )
        .unwrap()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[test]
    fn test_records_decodes_every_class() {
        let fixture = setup();

        let records = fixture.zone.records().unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.is_linked_to(fixture.zone.as_ref())));
        assert_eq!(fixture.zone.start_of_authority().unwrap().record_type(), RecordType::SOA);
        assert_eq!(fixture.zone.name_servers().unwrap()[0].data_text(), SERVER);
    }

    #[test]
    fn test_records_skips_undecodable_instances() {
        let fixture = setup();
        seed(&fixture.connection, "MicrosoftDNS_MXType", ZONE, "not-a-number mail.example.com");
        seed(&fixture.connection, "MicrosoftDNS_NAPTRType", ZONE, "100 10 \"\" \"\" \"\" .");
        seed(&fixture.connection, "MicrosoftDNS_MXType", ZONE, "10 mail.example.com");

        let records = fixture.zone.records().unwrap();
        assert_eq!(records.len(), 3);

        let mx = fixture.zone.records_of_type(RecordType::MX).unwrap();
        assert_eq!(mx.len(), 1);
        assert_eq!(mx[0].data_text(), "[10] mail.example.com");
    }

    #[test]
    fn test_records_of_type_named_fails_loudly() {
        let fixture = setup();
        seed(&fixture.connection, "MicrosoftDNS_MXType", ZONE, "not-a-number mail.example.com");

        let error = fixture
            .zone
            .records_of_type_named(RecordType::MX, ZONE)
            .unwrap_err();

        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_records_of_type_named_filters_owner() {
        let fixture = setup();
        seed(&fixture.connection, "MicrosoftDNS_AType", "www.example.com", "192.168.1.10");
        seed(&fixture.connection, "MicrosoftDNS_AType", "ftp.example.com", "192.168.1.11");

        let found = fixture
            .zone
            .records_of_type_named(RecordType::A, "WWW.example.com")
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].data_text(), "192.168.1.10");
    }

    #[test]
    fn test_unsupported_type_query() {
        let fixture = setup();

        let error = fixture.zone.records_of_type(RecordType::NXT).unwrap_err();

        assert!(error.is_not_supported());
    }

    #[test]
    fn test_search_records() {
        let fixture = setup();
        let srv = Record::new(
            "_ldap._tcp.example.com",
            Duration::from_secs(600),
            SrvData::new(0, 100, 389, "dc1.example.com").unwrap(),
        )
        .unwrap();
        fixture.zone.create_record(&srv).unwrap();

        let found = fixture.zone.search_records("LDAP").unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].protocol(), Some("_tcp"));
        assert!(fixture.zone.search_records("kerberos").unwrap().is_empty());
    }

    #[test]
    fn test_connection_failure_propagates() {
        let fixture = setup();
        fixture.connection.set_offline(true);

        let error = fixture.zone.records().unwrap_err();

        assert_eq!(error.reason_code(), "ConnectionFailed");
    }

    // ========================================================================
    // Writes
    // ========================================================================

    #[test]
    fn test_create_record_writes_instance() {
        let fixture = setup();
        let template = a_template("host.example.com", 50);

        let created = fixture.zone.create_record(&template).unwrap();

        let path = created.provider_token().unwrap().as_str().to_string();
        let instance = fixture.connection.instance(&path).unwrap();
        assert_eq!(instance.class, "MicrosoftDNS_AType");
        assert_eq!(instance.string(PROP_OWNER_NAME), Some("host.example.com"));
        assert_eq!(instance.string(PROP_RECORD_DATA), Some("192.168.1.50"));
        assert_eq!(instance.string(PROP_CONTAINER_NAME), Some(ZONE));
        assert!(created.is_linked_to(fixture.zone.as_ref()));
        assert!(template.provider_token().is_none());
    }

    #[test]
    fn test_create_soa_rejected() {
        let fixture = setup();
        let soa = fixture.zone.start_of_authority().unwrap();

        assert!(fixture
            .zone
            .create_record(&soa)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_create_unsupported_type() {
        let fixture = setup();
        let template = Record::new(
            "box.example.com",
            Duration::from_secs(60),
            crate::records::MdData::new("mail.example.com").unwrap(),
        )
        .unwrap();

        let error = fixture.zone.create_record(&template).unwrap_err();

        assert!(error.is_not_supported());
        assert!(fixture.connection.instances().len() == 2);
    }

    #[test]
    fn test_save_record_updates_token() {
        let fixture = setup();
        let mut created = fixture
            .zone
            .create_record(&a_template("host.example.com", 50))
            .unwrap();
        let old_path = created.provider_token().cloned().unwrap();

        if let Some(a) = created.data_mut::<AData>() {
            a.set_address(Ipv4Addr::new(192, 168, 1, 51));
        }
        created.save().unwrap();

        let new_path = created.provider_token().cloned().unwrap();
        assert_ne!(new_path, old_path);
        assert!(!created.has_changes());
        let instance = fixture.connection.instance(new_path.as_str()).unwrap();
        assert_eq!(instance.string(PROP_RECORD_DATA), Some("192.168.1.51"));
    }

    #[test]
    fn test_save_unchanged_record_skips_write() {
        let fixture = setup();
        let mut created = fixture
            .zone
            .create_record(&a_template("host.example.com", 50))
            .unwrap();
        let path = created.provider_token().cloned();

        created.save().unwrap();

        assert_eq!(created.provider_token().cloned(), path);
    }

    #[test]
    fn test_save_failure_keeps_changes() {
        let fixture = setup();
        let mut created = fixture
            .zone
            .create_record(&a_template("host.example.com", 50))
            .unwrap();
        created.set_ttl(Duration::from_secs(30));
        fixture.connection.set_offline(true);

        assert!(created.save().is_err());
        assert!(created.has_changes());
    }

    #[test]
    fn test_fractional_ttl_not_written() {
        let fixture = setup();
        let template = Record::new(
            "host.example.com",
            Duration::from_millis(2500),
            AData::new(Ipv4Addr::new(192, 168, 1, 50)),
        )
        .unwrap();
        assert!(fixture
            .zone
            .create_record(&template)
            .unwrap_err()
            .is_invalid_argument());
        assert_eq!(fixture.connection.instances().len(), 2);

        let mut created = fixture
            .zone
            .create_record(&a_template("host.example.com", 50))
            .unwrap();
        created.set_ttl(Duration::from_millis(100));

        assert!(created.save().unwrap_err().is_invalid_argument());
        assert!(created.has_changes());
    }

    #[test]
    fn test_save_record_of_other_zone_rejected() {
        let fixture = setup();
        fixture.connection.add_zone("other.com", ZoneType::Primary, false);
        let other = fixture.server.zone("other.com").unwrap();
        let mut foreign = other
            .create_record(&a_template("host.other.com", 9))
            .unwrap();
        foreign.set_ttl(Duration::from_secs(1));

        let error = fixture.zone.save_record(&mut foreign).unwrap_err();

        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_delete_record() {
        let fixture = setup();
        let template = Record::new(
            ZONE,
            Duration::from_secs(3600),
            MxData::new(10, "mail.example.com").unwrap(),
        )
        .unwrap();
        let created = fixture.zone.create_record(&template).unwrap();

        created.delete().unwrap();

        assert!(fixture.zone.records_of_type(RecordType::MX).unwrap().is_empty());
        assert!(!fixture.zone.try_delete_record(&created));
    }

    #[test]
    fn test_delete_soa_rejected() {
        let fixture = setup();
        let soa = fixture.zone.start_of_authority().unwrap();

        assert!(soa.delete().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_zone_delete_not_supported() {
        let fixture = setup();

        assert!(fixture.zone.delete().unwrap_err().is_not_supported());
    }
}
