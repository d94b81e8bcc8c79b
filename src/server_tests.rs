// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the server contract's provided methods.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::mock::MockServer;
    use crate::zone::ZoneType;

    #[test]
    fn test_zone_lookup_ignores_case() {
        let server = MockServer::new("dns1.example.com");
        server.create_zone_named("Example.com").unwrap();

        let zone = server.zone("EXAMPLE.COM").unwrap();

        assert_eq!(zone.domain_name(), "Example.com");
        assert!(server.try_zone("example.com").is_some());
    }

    #[test]
    fn test_zone_not_found() {
        let server = MockServer::new("dns1.example.com");

        let error = server.zone("missing.test").unwrap_err();

        assert!(error.is_invalid_argument());
        assert!(error.to_string().contains("missing.test"));
        assert!(server.try_zone("missing.test").is_none());
    }

    #[test]
    fn test_create_zone_named_is_primary() {
        let server = MockServer::new("dns1.example.com");

        let zone = server.create_zone_named("10.in-addr.arpa").unwrap();

        assert_eq!(zone.zone_type(), ZoneType::Primary);
        assert!(zone.is_reverse());
    }

    #[test]
    fn test_try_create_zone_duplicate() {
        let server = MockServer::new("dns1.example.com");
        let template = ZoneTemplate::primary("example.com");

        assert!(server.try_create_zone(&template).is_some());
        assert!(server.try_create_zone(&template).is_none());
        assert_eq!(server.zones().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_zone_by_reference() {
        let server = MockServer::new("dns1.example.com");
        let zone = server.create_zone_named("example.com").unwrap();

        server.delete_zone(zone.as_ref()).unwrap();

        assert!(server.zones().unwrap().is_empty());
        assert!(!server.try_delete_zone("example.com"));
    }

    #[test]
    fn test_zone_delete_goes_through_server() {
        let server = MockServer::new("dns1.example.com");
        let zone = server.create_zone_named("example.com").unwrap();

        zone.delete().unwrap();

        assert!(server.try_zone("example.com").is_none());
        assert!(zone.server().is_none());
    }
}
