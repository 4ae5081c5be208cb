//! Property-based tests for the line codec.

use gyrofeed_core::SensorRecord;
use gyrofeed_stream::{decode_line, encode_line};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f32> {
    prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_decoded_line_matches_record(x in finite(), y in finite(), z in finite()) {
        let record = SensorRecord::new(x, y, z);
        let line = encode_line(&record);

        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
        prop_assert_eq!(line.matches(',').count(), 2);

        let decoded = decode_line(&line)?;
        prop_assert_eq!(decoded.x.to_bits(), x.to_bits());
        prop_assert_eq!(decoded.y.to_bits(), y.to_bits());
        prop_assert_eq!(decoded.z.to_bits(), z.to_bits());
    }

    #[test]
    fn prop_line_has_no_locale_artifacts(x in -1.0e6_f32..1.0e6, y in -1.0e6_f32..1.0e6, z in -1.0e6_f32..1.0e6) {
        let line = encode_line(&SensorRecord::new(x, y, z));
        prop_assert!(line.trim_end().chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ',')));
    }
}
