// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the shared record model.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::mock::MockServer;
    use crate::server::Server;
    use chrono::{TimeZone, Utc};
    use std::net::Ipv6Addr;

    fn a_record() -> Record {
        Record::new(
            "www.example.com",
            Duration::from_secs(3600),
            AData::new(Ipv4Addr::new(192, 0, 2, 1)),
        )
        .unwrap()
    }

    /// One record of every type.
    fn every_variant() -> Vec<Record> {
        let secs = Duration::from_secs;
        let data: Vec<RecordData> = vec![
            AData::new(Ipv4Addr::new(192, 0, 2, 1)).into(),
            AaaaData::new(Ipv6Addr::LOCALHOST).into(),
            AfsdbData::new(1, "afs.example.com").unwrap().into(),
            AtmaData::new(AtmaFormat::E164, "+358400123").unwrap().into(),
            CnameData::new("web.example.com").unwrap().into(),
            HinfoData::new("x86_64", "Linux").unwrap().into(),
            IsdnData::new("150862028003217", "004").unwrap().into(),
            KeyData::new(256, 3, 5, vec![1, 2, 3]).into(),
            MbData::new("mail.example.com").unwrap().into(),
            MdData::new("mail.example.com").unwrap().into(),
            MfData::new("mail.example.com").unwrap().into(),
            MgData::new("ops.example.com").unwrap().into(),
            MinfoData::new("admin.example.com", "errors.example.com")
                .unwrap()
                .into(),
            MrData::new("renamed.example.com").unwrap().into(),
            MxData::new(10, "mail.example.com").unwrap().into(),
            NsData::new("ns1.example.com").unwrap().into(),
            NxtData::new("b.example.com", vec![RecordType::A]).unwrap().into(),
            PtrData::new("host.example.com").unwrap().into(),
            RpData::new("admin.example.com", "contact.example.com")
                .unwrap()
                .into(),
            RtData::new(5, "relay.example.com").unwrap().into(),
            SigData::new(
                RecordType::A,
                5,
                2,
                secs(3600),
                Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                12345,
                "example.com",
                vec![9, 9],
            )
            .unwrap()
            .into(),
            SoaData::new(
                1,
                "ns1.example.com",
                "hostmaster.example.com",
                secs(900),
                secs(600),
                secs(86400),
                secs(3600),
            )
            .unwrap()
            .into(),
            SrvData::new(0, 100, 389, "dc1.example.com").unwrap().into(),
            TxtData::new("hello").unwrap().into(),
            WinsData::new(0, secs(2), secs(900), vec![Ipv4Addr::new(10, 0, 0, 5)])
                .unwrap()
                .into(),
            WinsrData::new(0, secs(2), secs(900), "corp.example.com")
                .unwrap()
                .into(),
            WksData::new(Ipv4Addr::new(10, 0, 0, 1), WksProtocol::TCP, vec![])
                .unwrap()
                .into(),
            X25Data::new("311061700956").unwrap().into(),
        ];

        data.into_iter()
            .map(|d| {
                let name = if d.record_type() == RecordType::SRV {
                    "_ldap._tcp.example.com"
                } else {
                    "host.example.com"
                };
                Record::new(name, secs(3600), d).unwrap()
            })
            .collect()
    }

    // ========================================================================
    // Construction Tests
    // ========================================================================

    #[test]
    fn test_new_record_is_clean_and_unattached() {
        let record = a_record();

        assert_eq!(record.record_type(), RecordType::A);
        assert_eq!(record.class(), RecordClass::IN);
        assert_eq!(record.ttl(), Duration::from_secs(3600));
        assert!(!record.has_changes());
        assert!(record.zone().is_none());
        assert!(record.provider_token().is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Record::new("  ", Duration::from_secs(60), TxtData::new("x").unwrap());

        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_with_class() {
        let record = Record::with_class(
            "version.bind",
            RecordClass::CH,
            Duration::ZERO,
            TxtData::new("9.18").unwrap(),
        )
        .unwrap();

        assert_eq!(record.class(), RecordClass::CH);
    }

    #[test]
    fn test_srv_owner_layout_enforced() {
        let data = SrvData::new(0, 0, 88, "kdc.example.com").unwrap();

        let error = Record::new("_kerberos.example", Duration::from_secs(60), data.clone())
            .unwrap_err();
        assert_eq!(error.kind(), crate::dns_errors::ErrorKind::InvalidFormat);

        let error = Record::new("_kerberos", Duration::from_secs(60), data).unwrap_err();
        assert_eq!(error.kind(), crate::dns_errors::ErrorKind::InvalidFormat);
    }

    // ========================================================================
    // Dirty Tracking Tests
    // ========================================================================

    #[test]
    fn test_ttl_change_marks_dirty() {
        let mut record = a_record();

        record.set_ttl(Duration::from_secs(60));

        assert!(record.has_changes());
        assert!(record.to_string().ends_with('*'));
    }

    #[test]
    fn test_restoring_value_clears_dirty() {
        let mut record = a_record();

        record.set_ttl(Duration::from_secs(60));
        record.set_ttl(Duration::from_secs(3600));

        assert!(!record.has_changes());
    }

    #[test]
    fn test_data_change_marks_dirty() {
        let mut record = a_record();

        if let Some(a) = record.data_mut::<AData>() {
            a.set_address(Ipv4Addr::new(192, 0, 2, 99));
        }

        assert!(record.has_changes());
        assert_eq!(record.data_text(), "192.0.2.99");
    }

    #[test]
    fn test_data_mut_of_other_type_is_none() {
        let mut record = a_record();

        assert!(record.data_mut::<MxData>().is_none());
        assert!(record.data_as::<SrvData>().is_none());
        assert_eq!(record.record_type(), RecordType::A);
        assert_eq!(
            record.data_as::<AData>().map(AData::address),
            Some(Ipv4Addr::new(192, 0, 2, 1))
        );
    }

    #[test]
    fn test_replacing_data_wholesale_marks_dirty() {
        let mut record = a_record();

        if let Some(a) = record.data_mut::<AData>() {
            *a = AData::new(Ipv4Addr::new(198, 51, 100, 7));
        }

        assert_eq!(record.record_type(), RecordType::A);
        assert!(record.has_changes());

        record.provider_saved();
        assert!(!record.has_changes());
    }

    #[test]
    fn test_provider_saved_resets_dirty() {
        let mut record = a_record();
        record.set_ttl(Duration::from_secs(5));
        if let Some(a) = record.data_mut::<AData>() {
            a.set_address(Ipv4Addr::new(10, 0, 0, 1));
        }

        record.provider_saved();

        assert!(!record.has_changes());
        assert_eq!(record.ttl(), Duration::from_secs(5));
        assert_eq!(record.data_text(), "10.0.0.1");
    }

    // ========================================================================
    // Clone Tests
    // ========================================================================

    #[test]
    fn test_clone_for_is_clean_copy() {
        let mut record = a_record();
        record.set_ttl(Duration::from_secs(120));

        let copy = record.clone_for(None, Some(ProviderToken::new("token-1")));

        assert!(!copy.has_changes());
        assert!(record.has_changes());
        assert_eq!(copy.ttl(), Duration::from_secs(120));
        assert_eq!(copy.name(), record.name());
        assert_eq!(copy.data(), record.data());
        assert_eq!(copy.provider_token().map(ProviderToken::as_str), Some("token-1"));
    }

    #[test]
    fn test_every_variant_tracks_and_clones() {
        let records = every_variant();
        let types: Vec<RecordType> = records.iter().map(Record::record_type).collect();
        assert_eq!(types, RecordType::ALL.to_vec());

        for mut record in records {
            assert!(!record.has_changes(), "{record} starts dirty");

            record.set_ttl(Duration::from_secs(1));
            assert!(record.has_changes(), "{record} ignores TTL change");

            let copy = record.clone_for(None, Some(ProviderToken::new("t")));
            assert!(!copy.has_changes(), "{copy} clone is dirty");
            assert_eq!(copy.data_text(), record.data_text());
            assert_eq!(copy.data(), record.data());
            assert_eq!(copy.ttl(), record.ttl());

            record.provider_saved();
            assert!(!record.has_changes(), "{record} stays dirty after save");
        }
    }

    #[test]
    fn test_plain_clone_keeps_dirty_state() {
        let mut record = a_record();
        record.set_ttl(Duration::from_secs(120));

        let copy = record.clone();

        assert!(copy.has_changes());
    }

    #[test]
    fn test_clone_unattached_drops_link_and_token() {
        let server = MockServer::new("dns1.example.com");
        let zone = server.create_zone_named("example.com").unwrap();
        let created = zone.create_record(&a_record()).unwrap();

        let template = created.clone_unattached();

        assert!(created.is_linked_to(zone.as_ref()));
        assert!(template.zone().is_none());
        assert!(template.provider_token().is_none());
        assert!(!template.is_linked_to(zone.as_ref()));
    }

    // ========================================================================
    // Zone Link Tests
    // ========================================================================

    #[test]
    fn test_unattached_save_and_delete() {
        let mut record = a_record();
        record.set_ttl(Duration::from_secs(1));

        assert!(record.save().unwrap_err().is_invalid_operation());
        assert!(record.delete().unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_link_to_other_zone() {
        let server = MockServer::new("dns1.example.com");
        let first = server.create_zone_named("first.test").unwrap();
        let second = server.create_zone_named("second.test").unwrap();

        let record = first.create_record(&a_record()).unwrap();

        assert!(record.is_linked_to(first.as_ref()));
        assert!(!record.is_linked_to(second.as_ref()));
    }

    #[test]
    fn test_link_does_not_keep_zone_alive() {
        let server = MockServer::new("dns1.example.com");
        let zone = server.create_zone_named("example.com").unwrap();
        let record = zone.create_record(&a_record()).unwrap();

        drop(zone);
        drop(server);

        assert!(record.zone().is_none());
        assert!(record.delete().unwrap_err().is_invalid_operation());
    }

    // ========================================================================
    // Derived Field Tests
    // ========================================================================

    #[test]
    fn test_srv_service_and_protocol() {
        let record = Record::new(
            "_ldap._tcp.example.com",
            Duration::from_secs(600),
            SrvData::new(0, 100, 389, "dc1.example.com").unwrap(),
        )
        .unwrap();

        assert_eq!(record.service(), Some("_ldap"));
        assert_eq!(record.protocol(), Some("_tcp"));
        assert_eq!(a_record().service(), None);
    }

    #[test]
    fn test_ptr_address() {
        let record = Record::new(
            "50.1.168.192.in-addr.arpa",
            Duration::from_secs(3600),
            PtrData::new("host.example.com").unwrap(),
        )
        .unwrap();

        assert_eq!(record.ptr_address().unwrap(), Ipv4Addr::new(192, 168, 1, 50));
    }

    #[test]
    fn test_ptr_address_of_short_name() {
        let record = Record::new(
            "1.168.192",
            Duration::from_secs(3600),
            PtrData::new("host.example.com").unwrap(),
        )
        .unwrap();

        assert!(record.ptr_address().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_ptr_address_on_other_type() {
        assert!(a_record().ptr_address().unwrap_err().is_invalid_operation());
    }

    // ========================================================================
    // Display Tests
    // ========================================================================

    #[test]
    fn test_display() {
        assert_eq!(
            a_record().to_string(),
            "A Record [www.example.com = 192.0.2.1]"
        );

        let mx = Record::new(
            "example.com",
            Duration::from_secs(3600),
            MxData::new(10, "mail.example.com").unwrap(),
        )
        .unwrap();
        assert_eq!(mx.to_string(), "MX Record [example.com = [10] mail.example.com]");
    }

    #[test]
    fn test_data_record_type_matches_variant() {
        let data: RecordData = NsData::new("ns1.example.com").unwrap().into();

        assert_eq!(data.record_type(), RecordType::NS);
        assert_eq!(data.data_text(), "ns1.example.com");
    }

    #[test]
    fn test_provider_token_display() {
        let token = ProviderToken::new("MicrosoftDNS_AType.Id=7");

        assert_eq!(token.to_string(), "MicrosoftDNS_AType.Id=7");
    }
}
