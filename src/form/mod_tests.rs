//! Tests for form flattening.

use super::{FieldValue, FormEncode, encode};
use std::collections::BTreeMap;

/// A record exercising every field kind.
struct AllKinds {
    description: Option<String>,
    name: String,
    count: i64,
    color: Option<bool>,
    amount: f64,
    tags: Vec<String>,
    metadata: BTreeMap<String, String>,
}

impl Default for AllKinds {
    fn default() -> Self {
        Self {
            description: None,
            name: String::new(),
            count: 0,
            color: None,
            amount: 0.0,
            tags: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }
}

impl FormEncode for AllKinds {
    fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("description", FieldValue::OptText(self.description.clone())),
            ("name", FieldValue::Text(self.name.clone())),
            ("count", FieldValue::Int(self.count)),
            ("color", FieldValue::OptFlag(self.color)),
            ("amount", FieldValue::Amount(self.amount)),
            ("tags", FieldValue::List(self.tags.clone())),
            ("metadata", FieldValue::Map(self.metadata.clone())),
        ]
    }
}

mod presence_rules {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let params = encode(&AllKinds::default());

        // Only the amount survives: every other kind is "absent".
        assert_eq!(params.len(), 1);
        assert!(params.contains_key("amount"));
    }

    #[test]
    fn optional_text_present_even_when_empty() {
        let record = AllKinds {
            description: Some(String::new()),
            ..AllKinds::default()
        };
        let params = encode(&record);

        assert_eq!(params.get("description").map(String::as_str), Some(""));
    }

    #[test]
    fn optional_text_absent_when_none() {
        let params = encode(&AllKinds::default());
        assert!(!params.contains_key("description"));
    }

    #[test]
    fn plain_text_omitted_when_empty() {
        let params = encode(&AllKinds::default());
        assert!(!params.contains_key("name"));
    }

    #[test]
    fn plain_text_emitted_when_non_empty() {
        let record = AllKinds {
            name: "Ana Mendieta".to_owned(),
            ..AllKinds::default()
        };
        let params = encode(&record);

        assert_eq!(params.get("name").map(String::as_str), Some("Ana Mendieta"));
    }

    #[test]
    fn int_zero_is_omitted() {
        let params = encode(&AllKinds::default());
        assert!(!params.contains_key("count"));
    }

    #[test]
    fn int_non_zero_is_emitted() {
        let record = AllKinds {
            count: -7,
            ..AllKinds::default()
        };
        let params = encode(&record);

        assert_eq!(params.get("count").map(String::as_str), Some("-7"));
    }

    #[test]
    fn absent_flag_sends_no_false_default() {
        let params = encode(&AllKinds::default());
        assert!(!params.contains_key("color"));
    }

    #[test]
    fn present_flag_renders_true_or_false() {
        let yes = AllKinds {
            color: Some(true),
            ..AllKinds::default()
        };
        let no = AllKinds {
            color: Some(false),
            ..AllKinds::default()
        };

        assert_eq!(encode(&yes).get("color").map(String::as_str), Some("true"));
        assert_eq!(encode(&no).get("color").map(String::as_str), Some("false"));
    }

    #[test]
    fn empty_list_is_omitted() {
        let params = encode(&AllKinds::default());
        assert!(!params.contains_key("tags"));
    }

    #[test]
    fn list_is_space_joined() {
        let record = AllKinds {
            tags: vec!["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()],
            ..AllKinds::default()
        };
        let params = encode(&record);

        assert_eq!(
            params.get("tags").map(String::as_str),
            Some("alpha beta gamma")
        );
    }
}

mod amount_formatting {
    use super::*;

    #[test]
    fn amount_always_has_two_decimals() {
        for (input, expected) in [
            (0.0, "0.00"),
            (1.0, "1.00"),
            (1.5, "1.50"),
            (12.345, "12.35"),
            (1000.0, "1000.00"),
        ] {
            let record = AllKinds {
                amount: input,
                ..AllKinds::default()
            };
            let params = encode(&record);
            assert_eq!(
                params.get("amount").map(String::as_str),
                Some(expected),
                "amount {input}"
            );
        }
    }

    #[test]
    fn zero_amount_is_still_emitted() {
        // Unlike ints, a zero amount is a real value (a $0.00 payment).
        let params = encode(&AllKinds::default());
        assert_eq!(params.get("amount").map(String::as_str), Some("0.00"));
    }
}

mod map_expansion {
    use super::*;

    #[test]
    fn map_entries_expand_to_bracketed_keys() {
        let mut metadata = BTreeMap::new();
        metadata.insert("campaign".to_owned(), "spring".to_owned());
        metadata.insert("batch".to_owned(), "42".to_owned());

        let record = AllKinds {
            metadata,
            ..AllKinds::default()
        };
        let params = encode(&record);

        assert_eq!(
            params.get("metadata[campaign]").map(String::as_str),
            Some("spring")
        );
        assert_eq!(params.get("metadata[batch]").map(String::as_str), Some("42"));
        // No bare top-level key for the map itself.
        assert!(!params.contains_key("metadata"));
    }

    #[test]
    fn empty_map_emits_nothing() {
        let params = encode(&AllKinds::default());
        assert!(params.keys().all(|k| !k.starts_with("metadata")));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn encoding_is_deterministic_for_a_given_record() {
        let mut metadata = BTreeMap::new();
        metadata.insert("z".to_owned(), "last".to_owned());
        metadata.insert("a".to_owned(), "first".to_owned());

        let record = AllKinds {
            description: Some("hello".to_owned()),
            name: "n".to_owned(),
            count: 3,
            color: Some(true),
            amount: 9.9,
            tags: vec!["t".to_owned()],
            metadata,
        };

        let first = encode(&record);
        let second = encode(&record);

        assert_eq!(first, second);
        // BTreeMap output iterates in sorted key order, stable for diffing.
        let keys: Vec<&str> = first.keys().map(String::as_str).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn encode_works_through_references() {
        let record = AllKinds::default();
        assert_eq!(encode(&&record), encode(&record));
    }
}

mod scenarios {
    use super::*;

    struct ZeroPayment {
        amount: f64,
        name: String,
    }

    impl FormEncode for ZeroPayment {
        fn form_fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("amount", FieldValue::Amount(self.amount)),
                ("name", FieldValue::Text(self.name.clone())),
            ]
        }
    }

    #[test]
    fn zero_amount_empty_name_encodes_to_amount_only() {
        let params = encode(&ZeroPayment {
            amount: 0.0,
            name: String::new(),
        });

        let mut expected = BTreeMap::new();
        expected.insert("amount".to_owned(), "0.00".to_owned());
        assert_eq!(params, expected);
    }
}
