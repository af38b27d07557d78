//! Property tests for release labels.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use skiff::domain::value_objects::ReleaseLabel;

fn datetime() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..=9999, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every label is exactly 14 ASCII digits and parses back.
    #[test]
    fn property_label_is_fourteen_digits(at in datetime()) {
        let label = ReleaseLabel::from_datetime(at);
        prop_assert_eq!(label.as_str().len(), 14);
        prop_assert!(label.as_str().bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(ReleaseLabel::parse(label.as_str()), Some(label.clone()));
    }

    /// PROPERTY: sorting labels as strings sorts releases by time.
    #[test]
    fn property_labels_sort_chronologically(a in datetime(), b in datetime()) {
        let (la, lb) = (ReleaseLabel::from_datetime(a), ReleaseLabel::from_datetime(b));
        prop_assert_eq!(la.cmp(&lb), a.cmp(&b));
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,32}") {
        let _ = ReleaseLabel::parse(&s);
    }
}
