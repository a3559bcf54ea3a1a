//! Property tests for byte escaping.

use proptest::prelude::*;

use icongen::escape::{decode_literal, escape_bytes, escape_reader};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: escaping then decoding yields the input minus line-feeds.
    #[test]
    fn property_decode_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let expected: Vec<u8> = bytes.iter().copied().filter(|&b| b != b'\n').collect();
        prop_assert_eq!(decode_literal(&escape_bytes(&bytes)), Some(expected));
    }

    /// PROPERTY: the literal never contains a raw line-feed or a quote.
    #[test]
    fn property_literal_is_single_line(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let literal = escape_bytes(&bytes);
        prop_assert!(!literal.contains('\n'));
        prop_assert!(!literal.contains('"'));
        prop_assert!(literal.is_ascii());
    }

    /// PROPERTY: one escape token per non line-feed byte.
    #[test]
    fn property_one_token_per_byte(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let literal = escape_bytes(&bytes);
        let kept = bytes.iter().filter(|&&b| b != b'\n').count();
        prop_assert_eq!(literal.matches('\\').count(), kept);
    }

    /// PROPERTY: streaming through a reader matches escaping a slice.
    #[test]
    fn property_reader_matches_slice(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let streamed = escape_reader(bytes.as_slice()).unwrap();
        prop_assert_eq!(streamed, escape_bytes(&bytes));
    }
}
