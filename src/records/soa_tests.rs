// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for SOA record data.

#[cfg(test)]
mod tests {
    use super::super::*;

    fn soa() -> SoaData {
        SoaData::new(
            2025010101,
            "ns1.example.com",
            "hostmaster.example.com",
            Duration::from_secs(900),
            Duration::from_secs(600),
            Duration::from_secs(86400),
            Duration::from_secs(3600),
        )
        .unwrap()
    }

    #[test]
    fn test_soa_data_text() {
        assert_eq!(
            soa().data_text(),
            "[2025010101], ns1.example.com, hostmaster.example.com"
        );
    }

    #[test]
    fn test_soa_blank_names_rejected() {
        let result = SoaData::new(
            1,
            "",
            "hostmaster.example.com",
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
        );
        assert!(result.unwrap_err().is_invalid_argument());

        assert!(soa().set_responsible_party(" ").is_err());
    }

    #[test]
    fn test_date_serial() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();

        assert_eq!(SoaData::date_serial(date, 1), 2025030701);
        assert_eq!(SoaData::date_serial(date, 250), 2025030799);
    }

    #[test]
    fn test_date_serial_saturates_past_u32() {
        let last_fit = NaiveDate::from_ymd_opt(4294, 12, 31).unwrap();
        let too_late = NaiveDate::from_ymd_opt(4295, 1, 1).unwrap();
        let far = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();

        assert_eq!(SoaData::date_serial(last_fit, 1), 4_294_123_101);
        assert_eq!(SoaData::date_serial(too_late, 1), u32::MAX);
        assert_eq!(SoaData::date_serial(far, 99), u32::MAX);
    }

    #[test]
    fn test_increment_serial_wraps() {
        let mut data = soa();
        data.increment_serial();
        assert_eq!(data.serial(), 2025010102);

        data.set_serial(u32::MAX);
        data.increment_serial();
        assert_eq!(data.serial(), 0);
    }

    #[test]
    fn test_every_field_tracked() {
        let mut data = soa();

        data.set_serial(2025010102);
        assert!(data.has_changes());
        data.mark_saved();

        data.set_primary_server("ns2.example.com").unwrap();
        assert!(data.has_changes());
        data.mark_saved();

        data.set_refresh(Duration::from_secs(1200));
        assert!(data.has_changes());
        data.mark_saved();

        data.set_retry(Duration::from_secs(300));
        assert!(data.has_changes());
        data.mark_saved();

        data.set_expire(Duration::from_secs(604800));
        assert!(data.has_changes());
        data.mark_saved();

        data.set_minimum_ttl(Duration::from_secs(60));
        assert!(data.has_changes());
        data.mark_saved();

        assert!(!data.has_changes());
        assert_eq!(data.minimum_ttl(), Duration::from_secs(60));
    }
}
