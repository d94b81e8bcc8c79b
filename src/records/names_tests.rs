// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for single-name record data.

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_cname_tracking() {
        let mut data = CnameData::new("www.example.com").unwrap();
        assert!(!data.has_changes());

        data.set_primary_name("web.example.com").unwrap();
        assert!(data.has_changes());
        assert_eq!(data.primary_name(), "web.example.com");
        assert_eq!(data.data_text(), "web.example.com");

        data.mark_saved();
        assert!(!data.has_changes());
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(NsData::new("").unwrap_err().is_invalid_argument());
        assert!(PtrData::new("   ").unwrap_err().is_invalid_argument());
        assert!(MbData::new("").is_err());
        assert!(MdData::new("").is_err());
        assert!(MfData::new("").is_err());
        assert!(MgData::new("").is_err());
        assert!(MrData::new("").is_err());
    }

    #[test]
    fn test_failed_set_leaves_value() {
        let mut data = NsData::new("ns1.example.com").unwrap();

        assert!(data.set_name_server("").is_err());

        assert_eq!(data.name_server(), "ns1.example.com");
        assert!(!data.has_changes());
    }

    #[test]
    fn test_mailbox_records() {
        let mut mg = MgData::new("ops.example.com").unwrap();
        mg.set_mailbox("oncall.example.com").unwrap();
        assert_eq!(mg.mailbox(), "oncall.example.com");

        let mut md = MdData::new("mail.example.com").unwrap();
        md.set_host("relay.example.com").unwrap();
        assert_eq!(md.host(), "relay.example.com");
        assert!(md.has_changes());
    }

    #[test]
    fn test_blank_param_name_reported() {
        let error = PtrData::new("").unwrap_err();

        assert!(error.to_string().contains("domain_name"));
    }
}
