// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for KEY, SIG and NXT record data.

#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::TimeZone;

    fn sig() -> SigData {
        SigData::new(
            RecordType::A,
            5,
            2,
            Duration::from_secs(3600),
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            12345,
            "example.com",
            vec![0xde, 0xad, 0xbe, 0xef],
        )
        .unwrap()
    }

    // ========================================================================
    // KEY Tests
    // ========================================================================

    #[test]
    fn test_key_data_text() {
        let data = KeyData::new(256, 3, 5, vec![1, 2, 3]);

        assert_eq!(data.public_key_base64(), "AQID");
        assert_eq!(data.data_text(), "[256][3][5] AQID");
    }

    #[test]
    fn test_key_tracking() {
        let mut data = KeyData::new(256, 3, 5, vec![1, 2, 3]);

        data.set_public_key(vec![1, 2, 3]);
        assert!(!data.has_changes());

        data.set_public_key(vec![4, 5, 6]);
        assert!(data.has_changes());
        data.mark_saved();

        data.set_flags(257);
        assert!(data.has_changes());
    }

    // ========================================================================
    // SIG Tests
    // ========================================================================

    #[test]
    fn test_sig_data_text() {
        let data = sig();

        assert_eq!(data.data_text(), "[A][5][2][3600] example.com (12345)");
        assert_eq!(data.signature_base64(), "3q2+7w==");
    }

    #[test]
    fn test_sig_blank_signer() {
        let result = SigData::new(
            RecordType::A,
            5,
            2,
            Duration::ZERO,
            Utc::now(),
            Utc::now(),
            0,
            "",
            vec![],
        );

        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_sig_timestamps_tracked() {
        let mut data = sig();

        data.set_expiration(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert!(data.has_changes());
        data.mark_saved();

        data.set_type_covered(RecordType::MX);
        assert!(data.has_changes());
        assert!(data.data_text().starts_with("[MX]"));
    }

    // ========================================================================
    // NXT Tests
    // ========================================================================

    #[test]
    fn test_nxt_data() {
        let mut data =
            NxtData::new("b.example.com", vec![RecordType::A, RecordType::MX]).unwrap();
        assert_eq!(data.data_text(), "b.example.com [A MX]");

        data.set_types(vec![RecordType::A]);
        assert!(data.has_changes());
        assert!(NxtData::new("", vec![]).is_err());
    }
}
